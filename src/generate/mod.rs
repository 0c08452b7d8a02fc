mod output;
mod script;
mod style;

pub use output::Output;
pub use script::{HookSlot, LegacyScript, BOOT_HOOK, DISPOSE_HOOK, HOOK_SLOTS, LEGACY_SCRIPTS};
pub use style::SCOPED_CSS;

/// Id of the element wrapping the ported markup; scopes every page rule
pub const CONTAINER_ID: &str = "legacy-chat-root";

const CONTAINER_CLASS: &str = "h-[calc(100vh-0px)] w-full overflow-hidden bg-[#f8fafc] text-slate-600 dark:bg-darkbg dark:text-slate-300 transition-colors duration-300";

/// Generator options
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Title passed to Inertia's `<Head>`
    pub page_title: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            page_title: "Chat Admin".to_string(),
        }
    }
}

/// Assemble the single-file component: script, template around the
/// fragment, then styles with the relocated block appended.
pub fn assemble(fragment: &str, relocated_style: &str, options: &GenerateOptions) -> String {
    let mut output = Output::new();

    script::emit_script(&mut output);
    output.newline();
    emit_template(&mut output, fragment, options);
    output.newline();
    style::emit_style(&mut output, relocated_style);

    output.finish()
}

fn emit_template(output: &mut Output, fragment: &str, options: &GenerateOptions) {
    output.line("<template>");
    output.indent();
    output.line(&format!("<Head title=\"{}\" />", escape_attr(&options.page_title)));
    output.line("<AdminLayout>");
    output.indent();
    output.line(&format!("<div id=\"{}\" class=\"{}\">", CONTAINER_ID, CONTAINER_CLASS));
    // The fragment keeps the indentation it had in the page
    output.push(fragment);
    output.newline();
    output.line("</div>");
    output.dedent();
    output.line("</AdminLayout>");
    output.dedent();
    output.line("</template>");
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn template(fragment: &str, title: &str) -> String {
        let mut output = Output::new();
        let options = GenerateOptions {
            page_title: title.to_string(),
        };
        emit_template(&mut output, fragment, &options);
        output.finish()
    }

    #[test]
    fn test_template_wraps_fragment() {
        let code = template("  <audio id=\"notif-sound\"></audio>\n  <div id=\"main-app\"></div>", "Chat Admin");
        assert_eq!(
            code,
            format!(
                "<template>\n  <Head title=\"Chat Admin\" />\n  <AdminLayout>\n    <div id=\"legacy-chat-root\" class=\"{CONTAINER_CLASS}\">\n  <audio id=\"notif-sound\"></audio>\n  <div id=\"main-app\"></div>\n    </div>\n  </AdminLayout>\n</template>\n"
            )
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let code = template("", "Say \"hi\" & <go>");
        assert!(code.contains("<Head title=\"Say &quot;hi&quot; &amp; &lt;go>\" />"));
    }

    #[test]
    fn test_sections_in_order() {
        let code = assemble("<p>x</p>", ".m{}\n", &GenerateOptions::default());
        let script = code.find("<script setup>").unwrap();
        let template = code.find("<template>").unwrap();
        let style = code.find("\n<style>\n").unwrap();
        assert!(script == 0 && script < template && template < style);
        assert!(code.contains("</script>\n\n<template>\n"));
        assert!(code.contains("</template>\n\n<style>\n"));
        assert!(code.ends_with(".m{}\n\n</style>\n"));
    }
}
