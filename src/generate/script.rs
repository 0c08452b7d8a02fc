//! The `<script setup>` section: session bindings, legacy script loading and
//! the placeholder fill-in that runs after mount.

use super::Output;
use crate::transform::{Placeholder, DIRECTIVE_RULES};

/// One of the legacy chat bundles, loaded after mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyScript {
    pub src: &'static str,
    /// Element id used to load the bundle at most once
    pub id: &'static str,
}

/// Loaded sequentially, in this order.
pub const LEGACY_SCRIPTS: &[LegacyScript] = &[
    LegacyScript {
        src: "/chat/inline.js",
        id: "legacy-chat-inline",
    },
    LegacyScript {
        src: "/chat/app.js",
        id: "legacy-chat-app",
    },
    LegacyScript {
        src: "/chat/game.js",
        id: "legacy-chat-game",
    },
];

/// A callback the legacy bundles may or may not register on `window`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookSlot {
    pub slot: &'static str,
    pub global: &'static str,
}

pub const BOOT_HOOK: HookSlot = HookSlot {
    slot: "boot",
    global: "__chatBoot",
};

pub const DISPOSE_HOOK: HookSlot = HookSlot {
    slot: "dispose",
    global: "__chatDispose",
};

pub const HOOK_SLOTS: &[HookSlot] = &[BOOT_HOOK, DISPOSE_HOOK];

const IMPORTS: &str = "\
import { computed, onMounted, onBeforeUnmount } from 'vue'
import { Head, usePage } from '@inertiajs/vue3'
import AdminLayout from '@/Layouts/AdminLayout.vue'
";

const SESSION_BINDINGS: &str = "\
const page = usePage()

const adminName = computed(() => page.props.auth?.user?.name || page.props.auth?.user?.username || 'Admin')
const adminRole = computed(() => page.props.auth?.user?.role || 'Staff')
const adminFirst = computed(() => (String(adminName.value || 'Admin').trim().split(/\\s+/)[0]) || 'Admin')
";

const LOAD_SCRIPT_ONCE: &str = "\
function loadScriptOnce(src, id) {
  return new Promise((resolve, reject) => {
    if (document.getElementById(id)) return resolve()
    const s = document.createElement('script')
    s.id = id
    s.src = src + (src.includes('?') ? '&' : '?') + 'v=' + Date.now()
    s.async = true
    s.onload = () => resolve()
    s.onerror = (e) => reject(e)
    document.body.appendChild(s)
  })
}
";

/// Emit the complete `<script setup>` section
pub fn emit_script(output: &mut Output) {
    output.line("<script setup>");
    output.push(IMPORTS);
    output.newline();
    output.push(SESSION_BINDINGS);
    output.newline();
    emit_hooks(output);
    output.newline();
    output.push(LOAD_SCRIPT_ONCE);
    output.newline();
    emit_apply_placeholders(output, DIRECTIVE_RULES.iter().map(|rule| &rule.placeholder));
    output.newline();
    emit_lifecycle(output);
    output.line("</script>");
}

fn emit_hooks(output: &mut Output) {
    output.line("// Callbacks the legacy chat scripts may register on window");
    output.line("const legacyHooks = {");
    output.indent();
    for hook in HOOK_SLOTS {
        output.line(&format!("{}: () => window.{},", hook.slot, hook.global));
    }
    output.dedent();
    output.line("}");
    output.newline();
    output.line("function runLegacyHook(slot) {");
    output.indent();
    output.line("const hook = legacyHooks[slot]?.()");
    output.line("if (typeof hook === 'function') hook()");
    output.dedent();
    output.line("}");
}

fn emit_apply_placeholders<'a>(output: &mut Output, placeholders: impl Iterator<Item = &'a Placeholder>) {
    output.line("function applyAdminPlaceholders() {");
    output.indent();
    output.line("const letter = (adminName.value || 'Admin').trim().charAt(0).toUpperCase()");
    output.line("const placeholders = {");
    output.indent();
    for placeholder in placeholders {
        output.line(&format!(
            "'{}': {} || '{}',",
            placeholder.id, placeholder.binding, placeholder.fallback
        ));
    }
    output.dedent();
    output.line("}");
    output.line("for (const [id, text] of Object.entries(placeholders)) {");
    output.indent();
    output.line("const el = document.getElementById(id)");
    output.line("if (el) el.textContent = text");
    output.dedent();
    output.line("}");
    output.dedent();
    output.line("}");
}

fn emit_lifecycle(output: &mut Output) {
    output.line("onMounted(async () => {");
    output.indent();
    output.line(&run_hook(DISPOSE_HOOK));
    output.newline();
    for script in LEGACY_SCRIPTS {
        output.line(&format!("await loadScriptOnce('{}', '{}')", script.src, script.id));
    }
    output.newline();
    output.line("applyAdminPlaceholders()");
    output.line(&run_hook(BOOT_HOOK));
    output.dedent();
    output.line("})");
    output.newline();
    output.line("onBeforeUnmount(() => {");
    output.indent();
    output.line(&run_hook(DISPOSE_HOOK));
    output.dedent();
    output.line("})");
}

fn run_hook(hook: HookSlot) -> String {
    format!("runLegacyHook('{}')", hook.slot)
}
