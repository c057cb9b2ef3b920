use super::*;

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from(["cibus-cli", "search", "tacos"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Search {
            ref query,
            highlight: None,
            expand: false,
            geojson: false,
        } if query == "tacos"
    ));
}

#[test]
fn parses_search_flags() {
    let cli = Cli::try_parse_from([
        "cibus-cli",
        "search",
        "hot dogs",
        "--highlight",
        "Joe's Tacos",
        "--expand",
        "--geojson",
    ])
    .expect("expected valid cli args");

    let Commands::Search {
        query,
        highlight,
        expand,
        geojson,
    } = cli.command;
    assert_eq!(query, "hot dogs");
    assert_eq!(highlight.as_deref(), Some("Joe's Tacos"));
    assert!(expand);
    assert!(geojson);
}

#[test]
fn search_requires_a_query() {
    assert!(Cli::try_parse_from(["cibus-cli", "search"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["cibus-cli"]).is_err());
}
