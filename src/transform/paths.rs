use super::{ConversionMetadata, Pass};

/// Literal substitution applied to every occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRewrite {
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

/// Relative links of the standalone page mapped onto the Laravel app's routes.
/// Applied in order.
pub const PATH_REWRITES: &[PathRewrite] = &[
    PathRewrite {
        name: "assets",
        from: "../assets/",
        to: "/assets/",
    },
    PathRewrite {
        name: "dashboard",
        from: "../dashboard.php",
        to: "/dashboard",
    },
    // Lands inside an href="..." attribute, closing it and adding an onclick
    PathRewrite {
        name: "logout",
        from: "../login.php?action=logout",
        to: "#\" onclick=\"__chatLogout()",
    },
];

pub struct PathRewritePass;

impl Pass for PathRewritePass {
    fn apply(&self, fragment: String, metadata: &mut ConversionMetadata) -> String {
        PATH_REWRITES.iter().fold(fragment, |fragment, rule| {
            let count = fragment.matches(rule.from).count();
            metadata.record(rule.name, count);
            if count == 0 {
                fragment
            } else {
                fragment.replace(rule.from, rule.to)
            }
        })
    }
}
