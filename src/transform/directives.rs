use super::{ConversionMetadata, Pass};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Static markup standing in for a server-side value until the page mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Element id the mounted component looks up
    pub id: &'static str,
    /// Text shown before the client fills in the live value
    pub fallback: &'static str,
    /// Script expression for the live value
    pub binding: &'static str,
}

impl Placeholder {
    pub fn markup(&self) -> String {
        format!("<span id=\"{}\">{}</span>", self.id, self.fallback)
    }
}

/// How a directive is found in the fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Exact directive text, every occurrence
    Literal(&'static str),
    /// Regex whose two groups are the enclosing element's opening and closing
    /// tags; the directive between them is replaced and the tags are kept
    Enclosed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveRule {
    pub matcher: Matcher,
    pub placeholder: Placeholder,
}

/// Known directives of the chat page, applied in order.
pub const DIRECTIVE_RULES: &[DirectiveRule] = &[
    DirectiveRule {
        matcher: Matcher::Literal("<?php echo strtoupper(substr($admin_name, 0, 1)); ?>"),
        placeholder: Placeholder {
            id: "adm-menu-letter",
            fallback: "A",
            binding: "letter",
        },
    },
    DirectiveRule {
        matcher: Matcher::Enclosed(
            r#"(<div class="text-slate-800 dark:text-white font-bold truncate text-sm">)\s*<\?php echo htmlspecialchars\(\$admin_name\); \?>\s*(</div>)"#,
        ),
        placeholder: Placeholder {
            id: "adm-menu-name",
            fallback: "Admin",
            binding: "adminName.value",
        },
    },
    DirectiveRule {
        matcher: Matcher::Enclosed(
            r#"(<div class="text-\[10px\][^"]*">)\s*<\?php echo htmlspecialchars\(\$admin_role\); \?>\s*(</div>)"#,
        ),
        placeholder: Placeholder {
            id: "adm-menu-role",
            fallback: "Staff",
            binding: "adminRole.value",
        },
    },
    DirectiveRule {
        matcher: Matcher::Literal("<?php echo htmlspecialchars($admin_first_name); ?>"),
        placeholder: Placeholder {
            id: "adm-first-name",
            fallback: "Admin",
            binding: "adminFirst.value",
        },
    },
];

/// A rule's matcher, ready to run
enum Compiled {
    Literal(&'static str),
    Enclosed(Regex),
}

lazy_static! {
    // Index-aligned with DIRECTIVE_RULES
    static ref COMPILED: Vec<Compiled> = DIRECTIVE_RULES
        .iter()
        .map(|rule| match rule.matcher {
            Matcher::Literal(directive) => Compiled::Literal(directive),
            Matcher::Enclosed(pattern) => {
                Compiled::Enclosed(Regex::new(pattern).expect("enclosed directive pattern"))
            }
        })
        .collect();
}

pub struct DirectivePass;

impl Pass for DirectivePass {
    fn apply(&self, fragment: String, metadata: &mut ConversionMetadata) -> String {
        DIRECTIVE_RULES
            .iter()
            .zip(COMPILED.iter())
            .fold(fragment, |fragment, (rule, compiled)| {
                let markup = rule.placeholder.markup();
                let (out, count) = match compiled {
                    Compiled::Literal(directive) => {
                        let count = fragment.matches(directive).count();
                        (fragment.replace(directive, &markup), count)
                    }
                    Compiled::Enclosed(regex) => {
                        let count = regex.find_iter(&fragment).count();
                        let out = regex
                            .replace_all(&fragment, |caps: &Captures| {
                                format!("{}{}{}", &caps[1], markup, &caps[2])
                            })
                            .into_owned();
                        (out, count)
                    }
                };
                metadata.record(rule.placeholder.id, count);
                out
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn substitute(fragment: &str) -> (String, ConversionMetadata) {
        let mut metadata = ConversionMetadata::new();
        let out = DirectivePass.apply(fragment.to_string(), &mut metadata);
        (out, metadata)
    }

    #[test]
    fn test_menu_letter() {
        let (out, metadata) = substitute(
            "<div class=\"avatar\"><?php echo strtoupper(substr($admin_name, 0, 1)); ?></div>",
        );
        assert_eq!(out, "<div class=\"avatar\"><span id=\"adm-menu-letter\">A</span></div>");
        assert_eq!(metadata.count("adm-menu-letter"), 1);
    }

    #[test]
    fn test_menu_name_keeps_enclosing_div() {
        let (out, _) = substitute(
            "<div class=\"text-slate-800 dark:text-white font-bold truncate text-sm\">\n    <?php echo htmlspecialchars($admin_name); ?>\n</div>",
        );
        assert_eq!(
            out,
            "<div class=\"text-slate-800 dark:text-white font-bold truncate text-sm\"><span id=\"adm-menu-name\">Admin</span></div>"
        );
    }

    #[test]
    fn test_menu_name_needs_exact_class() {
        let source = "<div class=\"font-bold\"><?php echo htmlspecialchars($admin_name); ?></div>";
        let (out, metadata) = substitute(source);
        assert_eq!(out, source);
        assert_eq!(metadata.count("adm-menu-name"), 0);
    }

    #[test]
    fn test_menu_role_any_tiny_text_class() {
        let (out, metadata) = substitute(
            "<div class=\"text-[10px] text-slate-400 uppercase\"><?php echo htmlspecialchars($admin_role); ?></div>",
        );
        assert_eq!(
            out,
            "<div class=\"text-[10px] text-slate-400 uppercase\"><span id=\"adm-menu-role\">Staff</span></div>"
        );
        assert_eq!(metadata.count("adm-menu-role"), 1);
    }

    #[test]
    fn test_first_name_every_occurrence() {
        let (out, metadata) = substitute(
            "Hi <?php echo htmlspecialchars($admin_first_name); ?>! Bye <?php echo htmlspecialchars($admin_first_name); ?>.",
        );
        assert_eq!(
            out,
            "Hi <span id=\"adm-first-name\">Admin</span>! Bye <span id=\"adm-first-name\">Admin</span>."
        );
        assert_eq!(metadata.count("adm-first-name"), 2);
    }

    #[test]
    fn test_placeholder_ids_are_unique() {
        let mut ids: Vec<_> = DIRECTIVE_RULES.iter().map(|rule| rule.placeholder.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DIRECTIVE_RULES.len());
    }

    #[test]
    fn test_enclosed_patterns_compile() {
        assert_eq!(COMPILED.len(), DIRECTIVE_RULES.len());
        for compiled in COMPILED.iter() {
            if let Compiled::Enclosed(regex) = compiled {
                assert_eq!(regex.captures_len(), 3);
            }
        }
    }
}
