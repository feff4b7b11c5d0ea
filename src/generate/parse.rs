use serde_json::Value;
use tracing::debug;

use crate::model::{Priority, Task};

/// Parse tasks out of a raw model response.
///
/// The response may be a bare JSON array, fenced in markdown, or buried in
/// prose; the first well-formed `[...]` span wins. Malformed elements are
/// skipped rather than failing the batch. Returns `None` when no array can be
/// found or nothing in it yields a valid task.
pub fn parse_task_response(response: &str) -> Option<Vec<Task>> {
    let array = extract_json_array(response)?;

    let values: Vec<Value> = serde_json::from_str(&array).ok()?;
    let tasks: Vec<Task> = values.iter().filter_map(value_to_task).collect();

    if tasks.is_empty() {
        debug!("Response array contained no usable task objects");
        None
    } else {
        Some(tasks)
    }
}

/// Scan for the first bracket-balanced `[...]` span, ignoring brackets inside
/// JSON strings.
fn extract_json_array(text: &str) -> Option<String> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '[' if !in_string => depth += 1,
            ']' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(text[start..start + offset + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

fn value_to_task(value: &Value) -> Option<Task> {
    let obj = value.as_object()?;

    let title = obj.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }

    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let hours = obj
        .get("estimated_hours")
        .map(coerce_hours)
        .unwrap_or(8.0);

    let priority = obj
        .get("priority")
        .and_then(Value::as_str)
        .map(Priority::parse_lenient)
        .unwrap_or_default();

    Some(
        Task::new(title, description)
            .with_hours(hours)
            .with_priority(priority)
            .with_skills(string_list(obj.get("skills_required")))
            .with_dependencies(string_list(obj.get("dependencies"))),
    )
}

/// Numbers pass through; numeric strings parse; anything else gets the
/// 8-hour default. Non-positive values also default.
fn coerce_hours(value: &Value) -> f64 {
    let hours = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match hours {
        Some(h) if h > 0.0 => h,
        _ => 8.0,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
