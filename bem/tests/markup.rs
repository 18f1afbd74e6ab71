use bem::scan_class_names;
use codespan_reporting::diagnostic::Severity;

fn names(source: &str) -> Vec<String> {
    scan_class_names(source, 0).class_names
}

#[test]
fn html_class_attribute() {
    assert_eq!(
        names(r#"<div class="card card--active"><p class="card__title">x</p></div>"#),
        vec!["card", "card--active", "card__title"]
    );
}

#[test]
fn jsx_class_name_attribute() {
    assert_eq!(
        names(r#"<Button className='btn btn_primary' onClick={go} />"#),
        vec!["btn", "btn_primary"]
    );
}

#[test]
fn whitespace_is_collapsed_and_blanks_dropped() {
    assert_eq!(
        names("<div class=\"  a\t\tb \n c  \"></div><span class=\"\"></span>"),
        vec!["a", "b", "c"]
    );
}

#[test]
fn duplicates_keep_first_position() {
    assert_eq!(
        names(r#"<a class="x y"></a><b class="y z x"></b>"#),
        vec!["x", "y", "z"]
    );
}

#[test]
fn unquoted_values() {
    assert_eq!(
        names("<div class=foo><br class=bar/><i class=baz>"),
        vec!["foo", "bar", "baz"]
    );
}

#[test]
fn spaces_around_equals() {
    assert_eq!(names(r#"<div class = "foo"></div>"#), vec!["foo"]);
}

#[test]
fn similar_attribute_names_are_ignored() {
    let source = r#"<div data-class="no" subclass="no" classes="no" class:active="no" class="yes"></div>"#;
    assert_eq!(names(source), vec!["yes"]);
}

#[test]
fn text_mentioning_class_is_ignored() {
    assert_eq!(names("<p>the class of the thing</p>"), Vec::<String>::new());
}

#[test]
fn jsx_expression_is_skipped_with_warning() {
    let source = r#"<div className={cx("a", { b: on })}><span className="c"></span></div>"#;
    let output = scan_class_names(source, 3);
    assert_eq!(output.class_names, vec!["c"]);
    assert_eq!(output.diagnostics.len(), 1);

    let warning = &output.diagnostics[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.file_id, 3);
    assert_eq!(&source[warning.span.clone()], r#"{cx("a", { b: on })}"#);
    assert!(!output.has_errors());
}

#[test]
fn braces_inside_strings_do_not_end_expression() {
    let source = r#"<div className={"}"} class="after"></div>"#;
    let output = scan_class_names(source, 0);
    assert_eq!(output.class_names, vec!["after"]);
}

#[test]
fn unterminated_value_is_an_error() {
    let source = "<div class=\"a b\"></div>\n<div class=\"oops";
    let output = scan_class_names(source, 0);
    assert_eq!(output.class_names, vec!["a", "b"]);
    assert!(output.has_errors());

    let error = &output.diagnostics[0];
    assert_eq!(error.message, "unterminated class attribute value");
    assert_eq!(&source[error.span.clone()], "\"oops");
}

#[test]
fn diagnostics_convert_for_codespan() {
    let output = scan_class_names("<a className={x}>", 7);
    let diagnostic = output.diagnostics[0].to_diagnostic();
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.labels[0].file_id, 7);
    assert_eq!(diagnostic.labels[0].range, 13..16);
}

#[test]
fn escaped_quotes_inside_expression_strings() {
    let source = r#"<div className={"a\"}"} class="after"></div>"#;
    let output = scan_class_names(source, 0);
    assert_eq!(output.class_names, vec!["after"]);
    assert_eq!(&source[output.diagnostics[0].span.clone()], r#"{"a\"}"}"#);
}

#[test]
fn escaped_backslash_closes_the_string() {
    let source = r#"<div className={'a\\'} class="b"></div>"#;
    let output = scan_class_names(source, 0);
    assert_eq!(output.class_names, vec!["b"]);
    assert_eq!(output.diagnostics.len(), 1);
}
