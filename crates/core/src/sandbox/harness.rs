//! Synthesized JavaScript evaluated around the learner's source: a console
//! prelude installed before execution and per-name probe scripts run after.

/// Accumulator global the prelude pushes console argument lists into.
pub const CONSOLE_GLOBAL: &str = "__evalscope_console__";

/// Installs a recording `console`. The engine realm has no native console,
/// so this object is both the capture and the implementation. Arguments are
/// sanitized to JSON-safe shapes at call time: functions and non-finite
/// numbers become descriptive strings, `undefined` becomes `null`, anything
/// that refuses to stringify (cycles) falls back to `String(value)`.
pub const CONSOLE_PRELUDE: &str = r#"
var __evalscope_console__ = [];
var console = (function () {
    function sanitize(value) {
        if (typeof value === "function") {
            return value.name ? "[Function: " + value.name + "]" : "[Function]";
        }
        if (typeof value === "undefined") {
            return null;
        }
        if (typeof value === "symbol" || typeof value === "bigint") {
            return String(value);
        }
        if (typeof value === "number" && !isFinite(value)) {
            return String(value);
        }
        try {
            JSON.stringify(value);
            return value;
        } catch (err) {
            return String(value);
        }
    }
    function record(args) {
        var entry = [];
        for (var i = 0; i < args.length; i++) {
            entry.push(sanitize(args[i]));
        }
        __evalscope_console__.push(entry);
    }
    return {
        log: function () { record(arguments); },
        info: function () { record(arguments); },
        warn: function () { record(arguments); },
        error: function () { record(arguments); },
        debug: function () { record(arguments); }
    };
})();
"#;

/// Probe template; `__NAME__` is replaced with the identifier under probe.
///
/// Returns a JSON-safe descriptor object. A name that is not reachable from
/// script scope (never declared, or block-scoped and gone) reports
/// `found: false` instead of throwing. Values are snapshotted through a JSON
/// round-trip; cyclic structures degrade to an empty shell of the right kind.
const PROBE_TEMPLATE: &str = r#"
(function () {
    var __value;
    try {
        __value = (__NAME__);
    } catch (err) {
        return { found: false };
    }
    var __type = typeof __value;
    var report = { found: true, type: __type, kind: "primitive" };
    if (__type === "undefined") {
        report.kind = "undefined";
    } else if (__value === null) {
        report.kind = "null";
    } else if (__type === "function") {
        report.kind = "function";
        report.name = __value.name || "";
    } else if (Array.isArray(__value)) {
        report.kind = "array";
        try { report.value = JSON.parse(JSON.stringify(__value)); }
        catch (err) { report.value = []; }
    } else if (__type === "object") {
        report.kind = "object";
        var ctor = __value.constructor && __value.constructor.name;
        if (ctor && ctor !== "Object") {
            report.ctor = ctor;
        }
        try { report.value = JSON.parse(JSON.stringify(__value)); }
        catch (err) { report.value = {}; }
    } else if (__type === "number" && !isFinite(__value)) {
        report.special = String(__value);
    } else if (__type === "bigint" || __type === "symbol") {
        report.value = String(__value);
    } else {
        report.value = __value;
    }
    return report;
})()
"#;

/// Build the probe script for one identifier. The caller is responsible for
/// only passing validated identifiers.
pub fn probe_script(name: &str) -> String {
    PROBE_TEMPLATE.replace("__NAME__", name)
}

/// Expression that reads back the console accumulator.
pub fn console_probe() -> &'static str {
    CONSOLE_GLOBAL
}
