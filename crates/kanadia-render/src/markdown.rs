use crate::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Kanadia entry decisions\n\n");
    let c = &report.counts;
    out.push_str(&format!(
        "- As of: {}\n- Travellers: {}\n- Accept: {} / Secondary: {} / Reject: {} / Quarantine: {}\n\n",
        report.as_of,
        report.decisions.len(),
        c.accept,
        c.secondary,
        c.reject,
        c.quarantine
    ));

    if report.decisions.is_empty() {
        out.push_str("No travellers.\n");
        return out;
    }

    out.push_str("## Decisions\n\n");
    out.push_str("| # | Verdict | Code | Reason |\n");
    out.push_str("|---|---------|------|--------|\n");

    for d in &report.decisions {
        out.push_str(&format!(
            "| {} | **{}** | `{}` | {} |\n",
            d.index,
            d.verdict,
            d.code,
            escape_cell(&d.message)
        ));
    }

    out
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}
