use crate::aggregator::Aggregation;
use crate::app_config::ReportConfig;
use crate::sanitizer;

// @module: LaTeX document assembly

// @const: Notice emitted for a category without any responses
const EMPTY_CATEGORY_NOTICE: &str = "Keine Antworten in dieser Kategorie gefunden.";

/// Assemble the full LaTeX report from the aggregated responses.
///
/// Pure text assembly. Sections follow the configured target-column order,
/// never the order buckets happened to be populated in.
pub fn build_report(
    aggregation: &Aggregation,
    target_columns: &[String],
    report: &ReportConfig,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Preamble
    lines.push("\\documentclass[12pt,a4paper]{article}".to_string());
    lines.push("\\usepackage[utf8]{inputenc}".to_string());
    lines.push(format!(
        "\\usepackage[main={},provide=*]{{babel}}",
        report.language
    ));
    lines.push("\\usepackage{geometry}".to_string());
    lines.push("\\geometry{margin=2cm}".to_string());
    lines.push("\\usepackage{enumitem}".to_string());
    lines.push("\\usepackage[colorlinks=true,linkcolor=blue,urlcolor=blue]{hyperref}".to_string());
    lines.push("\\usepackage{xcolor}".to_string());
    lines.push(String::new());

    // Title block
    lines.push(format!("\\title{{{}}}", report.title));
    lines.push(format!("\\author{{{}}}", report.author));
    lines.push("\\date{\\today}".to_string());
    lines.push(String::new());
    lines.push("\\begin{document}".to_string());
    lines.push("\\maketitle".to_string());
    lines.push(String::new());
    lines.push(format!(
        "\\textbf{{Anzahl verarbeiteter Dateien:}} {}",
        aggregation.processed_files
    ));
    lines.push(String::new());
    lines.push("\\tableofcontents".to_string());
    lines.push("\\newpage".to_string());
    lines.push(String::new());

    // One section per category, fixed order
    for column in target_columns {
        let section_name = column.replace(':', "").trim().to_string();
        lines.push(format!("\\section{{{}}}", section_name));
        lines.push(String::new());

        let records = aggregation.bucket(column);
        if records.is_empty() {
            lines.push(EMPTY_CATEGORY_NOTICE.to_string());
            lines.push(String::new());
            lines.push("\\newpage".to_string());
            continue;
        }

        lines.push(format!("\\textbf{{Anzahl Antworten:}} {}", records.len()));
        lines.push(String::new());
        lines.push("\\begin{itemize}[leftmargin=*]".to_string());

        for record in records {
            let escaped_source = sanitizer::escape_source_name(&record.source);
            lines.push(format!(
                "\\item {} \\textcolor{{gray}}{{\\small({})}}",
                record.comment, escaped_source
            ));
        }

        lines.push("\\end{itemize}".to_string());
        lines.push(String::new());
        lines.push("\\newpage".to_string());
    }

    lines.push("\\end{document}".to_string());

    lines.join("\n")
}
