//! HTML report output

use crate::error::DoctorError;
use chrono::Utc;

use super::{ReportRenderer, BADGE_FILE, JSON_REPORT_FILE};
use crate::rules::results::{FileResult, Issue, ScanResult};

/// Standalone HTML page with the score, totals and every file's issues
pub struct HtmlReport {
    timestamp: bool,
}

impl HtmlReport {
    pub fn new() -> Self {
        Self { timestamp: true }
    }

    /// Omit the generation time, making the output reproducible
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = false;
        self
    }

    fn format_issue(&self, issue: &Issue) -> String {
        format!(
            r#"<li class="i {sev}"><span class="sev">{sev_upper}</span> {message}{line} <code>{code}</code></li>"#,
            sev = issue.severity,
            sev_upper = issue.severity.as_str().to_uppercase(),
            message = escape(&issue.message),
            line = issue
                .line
                .map_or(String::new(), |l| format!(" <em>(line {})</em>", l)),
            code = escape(&issue.code),
        )
    }

    fn format_file(&self, file: &FileResult) -> String {
        let issues = if file.is_clean() {
            r#"<li class="ok">No issues</li>"#.to_string()
        } else {
            file.issues.iter().map(|i| self.format_issue(i)).collect()
        };

        format!(
            r#"<section class="file"><h3>{} <small>({})</small></h3><ul>{}</ul></section>"#,
            escape(&file.path),
            file.file_type,
            issues
        )
    }
}

impl Default for HtmlReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for HtmlReport {
    fn render_report(&self, result: &ScanResult) -> Result<String, DoctorError> {
        let rows: String = result.files.iter().map(|f| self.format_file(f)).collect();

        let generated = if self.timestamp {
            format!(
                " • Generated: {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            )
        } else {
            String::new()
        };

        let html = format!(
            r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<title>yaml-doctor – report</title>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<style>
body{{font:14px system-ui, -apple-system, Segoe UI, Roboto, Ubuntu, Cantarell, Noto Sans, Arial; margin:24px; color:#222}}
h1{{margin:0 0 4px}} .muted{{color:#666}}
.sum{{display:flex;align-items:center;gap:16px;margin:8px 0 24px}}
.badge{{border:1px solid #ddd;border-radius:6px;padding:8px;background:#fafafa}}
.file{{margin:16px 0}}
ul{{padding-left:18px}}
.i{{margin:4px 0}}
.i .sev{{font-weight:700;margin-right:6px}}
.i.error{{color:#b00020}} .i.warn{{color:#b19600}} .i.info{{color:#444}}
.ok{{color:#2e7d32}}
code{{background:#f5f5f5;padding:1px 4px;border-radius:4px}}
small{{color:#666}}
footer{{margin-top:32px;color:#777}}
a.btn{{display:inline-block;padding:6px 10px;border:1px solid #ddd;border-radius:6px;text-decoration:none}}
</style>
</head>
<body>
<h1>yaml-doctor</h1>
<div class="muted">Scan at: <code>{root}</code> • Files: {file_count}{generated}</div>

<div class="sum">
  <div class="badge"><img src="./{badge}" alt="badge"/></div>
  <div>
    <div><b>Score:</b> {score}/100</div>
    <div>Errors: {errors} • Warnings: {warnings} • Info: {infos}</div>
    <div style="margin-top:8px">
      <a class="btn" href="./{json}" download>Download JSON</a>
      <a class="btn" href="./{badge}" download>Download badge</a>
    </div>
  </div>
</div>

{rows}

<footer>
  <p>Report generated by yaml-doctor v{version}</p>
</footer>
</body>
</html>"#,
            root = escape(&result.root),
            file_count = result.files.len(),
            generated = generated,
            badge = BADGE_FILE,
            json = JSON_REPORT_FILE,
            score = result.score,
            errors = result.totals.error,
            warnings = result.totals.warn,
            infos = result.totals.info,
            rows = rows,
            version = env!("CARGO_PKG_VERSION"),
        );

        Ok(html)
    }
}

/// Escape text for use in HTML content and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::results::FileType;

    fn create_test_result() -> ScanResult {
        ScanResult::from_files(
            "/repo",
            vec![
                FileResult::new(
                    "k8s/pod.yaml",
                    FileType::Kubernetes,
                    vec![
                        Issue::error("k8s.kind", "Missing kind"),
                        Issue::info("style.trailingSpace", "Trailing whitespace at end of line")
                            .with_line(7),
                    ],
                ),
                FileResult::new("clean.yml", FileType::Generic, vec![]),
            ],
        )
    }

    #[test]
    fn test_render_report() {
        let html = HtmlReport::new().render_report(&create_test_result()).unwrap();

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<code>/repo</code> • Files: 2"));
        assert!(html.contains("<b>Score:</b> 87/100"));
        assert!(html.contains("Errors: 1 • Warnings: 0 • Info: 1"));
        assert!(html.contains("<h3>k8s/pod.yaml <small>(kubernetes)</small></h3>"));
        assert!(html.contains(r#"<span class="sev">ERROR</span> Missing kind <code>k8s.kind</code>"#));
        assert!(html.contains("<em>(line 7)</em>"));
        assert!(html.contains(r#"<li class="ok">No issues</li>"#));
        assert!(html.contains("Generated:"));
    }

    #[test]
    fn test_render_without_timestamp_is_stable() {
        let result = create_test_result();
        let report = HtmlReport::new().without_timestamp();
        let first = report.render_report(&result).unwrap();
        let second = report.render_report(&result).unwrap();
        assert_eq!(first, second);
        assert!(!first.contains("Generated:"));
    }

    #[test]
    fn test_messages_are_escaped() {
        let result = ScanResult::from_files(
            "/r",
            vec![FileResult::new(
                "<b>.yml",
                FileType::Generic,
                vec![Issue::error("yaml.parse", "Error parsing YAML: <script>&\"")],
            )],
        );
        let html = HtmlReport::new().render_report(&result).unwrap();
        assert!(html.contains("&lt;b&gt;.yml"));
        assert!(html.contains("&lt;script&gt;&amp;&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&'\""), "a&lt;b&gt;&amp;&#39;&quot;");
        assert_eq!(escape("plain"), "plain");
    }
}
