use std::fmt::Write;

use crate::store::Snapshot;

const PAGE_TITLE: &str = "Shiprocket Webhook Data";

/// Seconds between client-side reloads of the page.
const REFRESH_SECS: u32 = 10;

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; }
        .webhook-item { border: 1px solid #ddd; margin: 10px 0; padding: 15px; border-radius: 5px; }
        .timestamp { color: #666; font-size: 14px; }
        pre { background: #f5f5f5; padding: 10px; border-radius: 3px; overflow-x: auto; }
        .no-data { text-align: center; color: #888; padding: 50px; }
"#;

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the buffered webhooks as a self-refreshing HTML page, newest
/// first.
pub fn render_data_page(snapshot: &Snapshot) -> String {
    let mut items = String::new();
    if snapshot.records.is_empty() {
        items.push_str(r#"<div class="no-data">No webhook data received yet</div>"#);
    }
    for record in &snapshot.records {
        let body = serde_json::to_string_pretty(&record.body)
            .unwrap_or_else(|_| record.body.to_string());
        // writing into a String cannot fail
        let _ = write!(
            items,
            r#"
            <div class="webhook-item">
                <div class="timestamp">Received: {}</div>
                <pre>{}</pre>
            </div>"#,
            escape_html(&record.timestamp),
            escape_html(&body),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <style>{style}    </style>
</head>
<body>
    <h1>{title}</h1>
    <p>Total webhooks received: <strong>{total}</strong></p>
    <div id="webhooks">{items}
    </div>
    <script>
        setTimeout(() => location.reload(), {refresh_ms});
    </script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        style = STYLE,
        total = snapshot.total,
        items = items,
        refresh_ms = REFRESH_SECS * 1000,
    )
}
