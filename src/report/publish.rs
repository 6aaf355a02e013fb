//! 成果物发布 - 合并章节渲染为HTML页面并输出
//!
//! 默认落盘到输出目录，配置了上传端点时改为HTTP上传。
//! 发布失败只记录日志，不影响报告状态。

use std::fs;
use std::time::Duration;

use anyhow::{Context as _, Result};
use chrono::Utc;

use crate::report::context::ReportContext;
use crate::types::ReportSection;

const UPLOAD_TIMEOUT_SECS: u64 = 30;

/// 发布报告成果物，返回成果物URL；未启用或失败时返回None
pub async fn execute(context: &ReportContext, sections: &[ReportSection]) -> Option<String> {
    if !context.config.publish.enabled {
        println!("   ⚠️ 成果物发布未启用，跳过");
        return None;
    }
    if sections.is_empty() {
        println!("   ⚠️ 无章节内容，跳过成果物发布");
        return None;
    }

    println!("🖊️ 成果物渲染中...");
    let html = render_report(context, sections);

    let result = match context.config.publish.upload_url.clone() {
        Some(upload_url) => HttpOutlet { upload_url }.publish(context, &html).await,
        None => DiskOutlet.publish(context, &html).await,
    };

    match result {
        Ok(url) => {
            println!("💾 成果物发布完成: {}", url);
            Some(url)
        }
        Err(e) => {
            eprintln!("   ⚠️ 成果物发布失败，继续完成流程: {}", e);
            None
        }
    }
}

/// 成果物出口
pub trait Outlet {
    async fn publish(&self, context: &ReportContext, html: &str) -> Result<String>;
}

/// 磁盘出口：写入 <output_path>/<request_id>/report.html
pub struct DiskOutlet;

impl Outlet for DiskOutlet {
    async fn publish(&self, context: &ReportContext, html: &str) -> Result<String> {
        let report_dir = context
            .config
            .output_path
            .join(context.request.id.to_string());
        fs::create_dir_all(&report_dir)
            .with_context(|| format!("failed to create output dir {}", report_dir.display()))?;

        let report_path = report_dir.join("report.html");
        fs::write(&report_path, html)
            .with_context(|| format!("failed to write {}", report_path.display()))?;

        let absolute = fs::canonicalize(&report_path).unwrap_or(report_path);
        Ok(format!("file://{}", absolute.display()))
    }
}

/// HTTP出口：PUT上传渲染结果，返回公开URL
pub struct HttpOutlet {
    upload_url: String,
}

impl Outlet for HttpOutlet {
    async fn publish(&self, context: &ReportContext, html: &str) -> Result<String> {
        let object_name = format!("{}/report.html", context.request.id);
        let target = format!("{}/{}", self.upload_url.trim_end_matches('/'), object_name);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .build()
            .context("failed to build the artifact upload HTTP client")?;

        client
            .put(&target)
            .header("content-type", "text/html; charset=utf-8")
            .body(html.to_string())
            .send()
            .await
            .with_context(|| format!("artifact upload request failed: {}", target))?
            .error_for_status()
            .context("artifact upload returned an error status")?;

        let url = match &context.config.publish.public_url_base {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), object_name),
            None => target,
        };
        Ok(url)
    }
}

/// 渲染完整HTML页面：页头信息 + 各章节Markdown转HTML
fn render_report(context: &ReportContext, sections: &[ReportSection]) -> String {
    let request = &context.request;
    let prepared_by = context
        .config
        .publish
        .prepared_by
        .as_deref()
        .unwrap_or("Automated Report Engine");
    let date = Utc::now().format("%Y-%m-%d");

    let merged_markdown = sections
        .iter()
        .map(|s| s.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    let body = markdown::to_html(&merged_markdown);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: Georgia, serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; color: #222; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: 6px 10px; text-align: left; }}
header {{ border-bottom: 2px solid #222; margin-bottom: 2rem; padding-bottom: 1rem; }}
header p {{ color: #555; margin: 0.2rem 0; }}
</style>
</head>
<body>
<header>
<h1>{title}</h1>
<p>Founder: {founder} · Company: {company}</p>
<p>Prepared by {prepared_by} · {date}</p>
</header>
{body}
</body>
</html>
"#,
        title = escape_html(&request.title),
        founder = escape_html(&request.founder_name),
        company = escape_html(&request.company_name),
        prepared_by = escape_html(prepared_by),
        date = date,
        body = body,
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::{AnalysisRequest, NewRequest};
    use uuid::Uuid;

    fn context() -> ReportContext {
        let request = AnalysisRequest::from_spec(NewRequest {
            submitter_id: None,
            founder_name: "Jane <Doe>".to_string(),
            company_name: "Acme & Co".to_string(),
            company_description: "B2B tooling".to_string(),
            reference_url: None,
            deal_id: None,
            title: None,
        });
        ReportContext::new(Config::default(), request).unwrap()
    }

    #[test]
    fn test_render_report_escapes_header_fields() {
        let context = context();
        let sections = vec![ReportSection::new(
            Uuid::new_v4(),
            "market_opportunity_competitive_landscape",
            "### Market\n\nStrong growth.",
        )];

        let html = render_report(&context, &sections);
        assert!(html.contains("Jane &lt;Doe&gt;"));
        assert!(html.contains("Acme &amp; Co"));
        assert!(html.contains("<h3>Market</h3>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&"#), "&lt;a href=&quot;x&quot;&gt;&amp;");
    }
}
