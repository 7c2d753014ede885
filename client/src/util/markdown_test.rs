use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_html("# 今天\n\n- **数学** 作业\n- [x] 背单词");
    assert!(html.contains("<h1>今天</h1>"));
    assert!(html.contains("<strong>数学</strong>"));
    assert!(html.contains("checkbox"));
}

#[test]
fn raw_html_is_escaped() {
    let html = render_html("hello <script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn block_html_is_escaped() {
    let html = render_html("<div onclick=\"x()\">hi</div>\n");
    assert!(!html.contains("<div"));
    assert!(html.contains("&lt;div"));
}
