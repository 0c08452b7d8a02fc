use super::{Output, CONTAINER_ID};

/// Page rules from the standalone chat page, every selector under the container id
pub const SCOPED_CSS: &str = include_str!("scoped.css");

/// Emit the `<style>` section, with the relocated inline block at the end
pub fn emit_style(output: &mut Output, relocated: &str) {
    debug_assert!(SCOPED_CSS.contains(CONTAINER_ID));
    output.line("<style>");
    output.push(SCOPED_CSS);
    output.newline();
    output.line("/* Modal-settings CSS (from native inline <style>) */");
    output.push(relocated);
    output.newline();
    output.line("</style>");
}
