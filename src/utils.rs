use std::collections::BTreeMap;

use k8s_openapi::{
    api::core::v1::Container,
    apimachinery::pkg::{
        apis::meta::v1::{LabelSelector, MicroTime, Time},
        util::intstr::IntOrString,
    },
    chrono::{Duration, Utc},
};

#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Annotation that predates the `storageClassName` field on volumes and claims.
pub const BETA_STORAGE_CLASS_ANNOTATION: &str = "volume.beta.kubernetes.io/storage-class";

/// Formats a duration the way cluster CLIs do, keeping at most two units
/// (e.g. `47s`, `5m12s`, `2d3h`, `12y`). The precision drops as the duration
/// grows.
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.num_seconds();
    if seconds < -1 {
        return "<invalid>".to_owned();
    }

    if seconds < 0 {
        return "0s".to_owned();
    }

    if seconds < 60 * 2 {
        return format!("{seconds}s");
    }

    let minutes = duration.num_minutes();
    if minutes < 10 {
        let seconds = seconds % 60;
        if seconds == 0 {
            return format!("{minutes}m");
        }

        return format!("{minutes}m{seconds}s");
    }

    if minutes < 60 * 3 {
        return format!("{minutes}m");
    }

    let hours = duration.num_hours();
    if hours < 8 {
        let minutes = minutes % 60;
        if minutes == 0 {
            return format!("{hours}h");
        }

        return format!("{hours}h{minutes}m");
    }

    if hours < 48 {
        return format!("{hours}h");
    }

    if hours < 24 * 8 {
        let remainder = hours % 24;
        if remainder == 0 {
            return format!("{}d", hours / 24);
        }

        return format!("{}d{remainder}h", hours / 24);
    }

    if hours < 24 * 365 * 2 {
        return format!("{}d", hours / 24);
    }

    if hours < 24 * 365 * 8 {
        let days = (hours / 24) % 365;
        if days == 0 {
            return format!("{}y", hours / 24 / 365);
        }

        return format!("{}y{days}d", hours / 24 / 365);
    }

    format!("{}y", hours / 24 / 365)
}

/// Formats the time elapsed since `timestamp`, or `<unknown>` when the
/// timestamp is missing.
pub fn format_timestamp_since(timestamp: Option<&Time>) -> String {
    match timestamp {
        Some(timestamp) => format_duration(Utc::now().signed_duration_since(timestamp.0)),
        None => "<unknown>".to_owned(),
    }
}

/// [`format_timestamp_since`] for microsecond-precision timestamps.
pub fn format_micro_timestamp_since(timestamp: Option<&MicroTime>) -> String {
    match timestamp {
        Some(timestamp) => format_duration(Utc::now().signed_duration_since(timestamp.0)),
        None => "<unknown>".to_owned(),
    }
}

/// Joins an already truncated list with commas, appending ` + N more...` when
/// `count` elements were seen but only a prefix was kept. An empty result
/// renders as `<unset>`.
pub fn list_with_more(list: &[String], more: bool, count: usize, max: usize) -> String {
    let joined = list.join(",");
    if more {
        return format!("{joined} + {} more...", count - max);
    }

    if joined.is_empty() {
        return "<unset>".to_owned();
    }

    joined
}

/// Formats a label map as `key1=value1,key2=value2`, or `<none>` when empty.
pub fn format_labels(labels: Option<&BTreeMap<String, String>>) -> String {
    match labels {
        Some(labels) if !labels.is_empty() => labels
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(","),
        _ => "<none>".to_owned(),
    }
}

/// Builds the canonical string form of a label selector. A missing or empty
/// selector stringifies to an empty string. Returns [`None`] when the selector
/// contains an expression with an unknown operator.
pub fn label_selector_string(selector: Option<&LabelSelector>) -> Option<String> {
    let Some(selector) = selector else {
        return Some(String::new());
    };

    let mut parts = Vec::new();
    if let Some(labels) = &selector.match_labels {
        for (key, value) in labels {
            parts.push(format!("{key}={value}"));
        }
    }

    if let Some(expressions) = &selector.match_expressions {
        for expression in expressions {
            let mut values = expression.values.clone().unwrap_or_default();
            values.sort();
            let values = values.join(",");
            match expression.operator.as_str() {
                "In" => parts.push(format!("{} in ({values})", expression.key)),
                "NotIn" => parts.push(format!("{} notin ({values})", expression.key)),
                "Exists" => parts.push(expression.key.clone()),
                "DoesNotExist" => parts.push(format!("!{}", expression.key)),
                _ => return None,
            }
        }
    }

    Some(parts.join(","))
}

/// Formats a label selector for display, rendering an empty (match anything)
/// selector as `<none>` and an unparsable one as `<error>`.
pub fn format_label_selector(selector: Option<&LabelSelector>) -> String {
    match label_selector_string(selector) {
        Some(selector) if selector.is_empty() => "<none>".to_owned(),
        Some(selector) => selector,
        None => "<error>".to_owned(),
    }
}

/// Formats volume access modes in their abbreviated form, deduplicated and in
/// the canonical order.
pub fn access_modes_string(modes: &[String]) -> String {
    const ABBREVIATIONS: [(&str, &str); 4] = [
        ("ReadWriteOnce", "RWO"),
        ("ReadOnlyMany", "ROX"),
        ("ReadWriteMany", "RWX"),
        ("ReadWriteOncePod", "RWOP"),
    ];

    let mut result = Vec::new();
    for (mode, abbreviation) in ABBREVIATIONS {
        if modes.iter().any(|m| m == mode) {
            result.push(abbreviation);
        }
    }

    result.join(",")
}

/// Formats a boolean as `True` or `False`.
pub fn format_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Formats an optional boolean as `True`, `False` or `<unset>`.
pub fn format_bool_option(value: Option<bool>) -> &'static str {
    match value {
        Some(value) => format_bool(value),
        None => "<unset>",
    }
}

/// Formats an int-or-string value the way it appears in manifests.
pub fn format_int_or_string(value: &IntOrString) -> String {
    match value {
        IntOrString::Int(value) => value.to_string(),
        IntOrString::String(value) => value.clone(),
    }
}

/// Returns comma-separated container names and images for wide output.
pub fn container_cells(containers: &[Container]) -> (String, String) {
    let names = containers.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(",");
    let images = containers
        .iter()
        .map(|c| c.image.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    (names, images)
}

/// Joins a host and port, bracketing IPv6 hosts.
pub fn join_host_port(host: &str, port: i32) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
