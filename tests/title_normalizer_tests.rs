use activity_timeline::core::{BROWSER_CATEGORY, normalize_title};

#[test]
fn browser_titles_collapse_into_one_category() {
    assert_eq!(normalize_title("Mozilla Firefox — Example").as_str(), "Firefox");
    assert_eq!(normalize_title("Release notes - FIREFOX").as_str(), "Firefox");
    assert_eq!(normalize_title("mozilla.org").as_str(), BROWSER_CATEGORY);
}

#[test]
fn titles_with_urls_are_browser_tabs() {
    assert_eq!(normalize_title("https://x.com").as_str(), "Firefox");
    assert_eq!(
        normalize_title("Docs - https://docs.rs/chrono").as_str(),
        "Firefox"
    );
    assert_eq!(normalize_title("ftp://mirror").as_str(), "Firefox");
}

#[test]
fn composite_titles_keep_the_left_segment() {
    assert_eq!(normalize_title("some app - Example").as_str(), "some app");
    assert_eq!(
        normalize_title("Visual Studio Code — main.rs").as_str(),
        "Visual Studio Code"
    );
    assert_eq!(normalize_title("  Terminal   - ~/src").as_str(), "Terminal");
}

#[test]
fn plain_and_empty_titles() {
    assert_eq!(normalize_title("Slack").as_str(), "Slack");
    assert!(normalize_title("").is_empty());
    // Untrimmed when no separator applies.
    assert_eq!(normalize_title(" Slack ").as_str(), " Slack ");
}

#[test]
fn normalization_is_independent_of_call_order() {
    let titles = ["b - x", "a — y", "https://z", "plain"];
    let forward: Vec<String> = titles
        .iter()
        .map(|t| normalize_title(t).to_string())
        .collect();
    let mut backward: Vec<String> = titles
        .iter()
        .rev()
        .map(|t| normalize_title(t).to_string())
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}
