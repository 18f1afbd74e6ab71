use extract_css::Target;
use extract_css::args::{effective_target, flag_pair, inject_default_subcommand, languages_table};
use pretty_assertions::assert_eq;

fn inject(args: &[&str]) -> Vec<String> {
    let mut full = vec!["extract-css".to_string()];
    full.extend(args.iter().map(|a| a.to_string()));
    inject_default_subcommand(full)[1..].to_vec()
}

#[test]
fn positional_file_gets_generate() {
    assert_eq!(inject(&["page.html"]), vec!["generate", "page.html"]);
}

#[test]
fn generate_options_before_the_file() {
    assert_eq!(
        inject(&["--language", "scss", "--bem", "page.html", "-t", "stdout"]),
        vec!["generate", "--language", "scss", "--bem", "page.html", "-t", "stdout"]
    );
    assert_eq!(
        inject(&["-l", "scss", "page.html"]),
        vec!["generate", "-l", "scss", "page.html"]
    );
}

#[test]
fn classes_without_a_file() {
    assert_eq!(inject(&["--classes", "a b"]), vec!["generate", "--classes", "a b"]);
}

#[test]
fn global_options_stay_in_front() {
    assert_eq!(
        inject(&["--no-color", "-c", "my.toml", "-v", "page.html"]),
        vec!["--no-color", "-c", "my.toml", "-v", "generate", "page.html"]
    );
    assert_eq!(
        inject(&["--config=my.toml", "--bem", "page.html"]),
        vec!["--config=my.toml", "generate", "--bem", "page.html"]
    );
}

#[test]
fn config_value_named_like_a_subcommand_is_skipped() {
    assert_eq!(
        inject(&["--config", "test", "page.html"]),
        vec!["--config", "test", "generate", "page.html"]
    );
}

#[test]
fn explicit_subcommands_are_left_alone() {
    assert_eq!(inject(&["test", "fixtures"]), vec!["test", "fixtures"]);
    assert_eq!(inject(&["-v", "languages"]), vec!["-v", "languages"]);
    assert_eq!(inject(&["generate", "a.html"]), vec!["generate", "a.html"]);
}

#[test]
fn top_level_help_and_version_are_left_alone() {
    assert_eq!(inject(&["--help"]), vec!["--help"]);
    assert_eq!(inject(&["-V"]), vec!["-V"]);
    assert_eq!(inject(&[]), Vec::<String>::new());
}

#[test]
fn flag_pairs() {
    assert_eq!(flag_pair(false, false), None);
    assert_eq!(flag_pair(true, false), Some(true));
    assert_eq!(flag_pair(false, true), Some(false));
}

#[test]
fn classes_default_to_stdout() {
    assert_eq!(effective_target(true, None, Target::Scratch), Target::Stdout);
    assert_eq!(
        effective_target(true, Some(Target::NewFile), Target::Scratch),
        Target::NewFile
    );
    assert_eq!(effective_target(false, None, Target::NewFile), Target::NewFile);
    assert_eq!(
        effective_target(false, Some(Target::Stdout), Target::Scratch),
        Target::Stdout
    );
}

#[test]
fn languages_table_lists_every_dialect() {
    let table = languages_table();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].starts_with("css") && lines[1].contains("/* block */"));
    assert!(lines[5].starts_with("stylus") && lines[5].contains("styl ") && lines[5].contains("no"));
}
