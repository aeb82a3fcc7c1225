mod common;

use teleservices::commands::{run_list, ListOptions, Outcome};
use teleservices::models::Teleservice;

fn inventory() -> Vec<Teleservice> {
    vec![
        common::teleservice("alpha", "ts001.prod.imio.be", &["pkgA"]),
        common::teleservice("beta", "ts002.prod.imio.be", &["pkgB"]),
        common::teleservice("Saint-Hubert", "ts021.prod.imio.be", &["imio_townstreet"]),
        common::teleservice("saint-ghislain", "ts021.prod.imio.be", &["imio_ts_aes"]),
    ]
}

fn run(opts: ListOptions) -> (Outcome, String) {
    yansi::disable();
    let mut out = Vec::new();
    let outcome = run_list(&common::config("http://unused"), inventory(), &opts, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_list_by_package_shows_only_match() {
    let (outcome, out) = run(ListOptions {
        package: "pkgA".into(),
        ..Default::default()
    });

    assert_eq!(outcome, Outcome::Listed(1));
    assert_eq!(
        out,
        "alpha (production)\n\
         Host: ts001.prod.imio.be · Vhost: https://alpha.guichet-citoyen.be · Total size: 2.00 GB\n\
         Packages: [pkgA]\n\
         All Teleservices listed successfully (1 elements found so far!)\n"
    );
}

#[test]
fn test_list_package_miss_short_circuits() {
    // The host filter would also miss; only the package message may appear
    let (outcome, out) = run(ListOptions {
        package: "nope".into(),
        host: Some("nowhere".into()),
        ..Default::default()
    });

    assert_eq!(outcome, Outcome::NoPackageMatch);
    assert_eq!(out, "No Teleservices found for package nope\n");
}

#[test]
fn test_list_host_miss_short_circuits() {
    let (outcome, out) = run(ListOptions {
        host: Some("ts999".into()),
        ..Default::default()
    });

    assert_eq!(outcome, Outcome::NoHostMatch);
    assert_eq!(out, "No Teleservices found for host ts999\n");
}

#[test]
fn test_list_host_then_name_url_only() {
    let (outcome, out) = run(ListOptions {
        host: Some("ts021".into()),
        name: "SAINT-H".into(),
        url_only: true,
        ..Default::default()
    });

    assert_eq!(outcome, Outcome::Listed(1));
    assert_eq!(
        out,
        "https://Saint-Hubert.guichet-citoyen.be\n\
         All Teleservices listed successfully (1 elements found so far!)\n"
    );
}

#[test]
fn test_list_everything_in_order() {
    let (outcome, out) = run(ListOptions {
        url_only: true,
        ..Default::default()
    });

    assert_eq!(outcome, Outcome::Listed(4));
    let urls: Vec<_> = out.lines().take(4).collect();
    assert_eq!(
        urls,
        vec![
            "https://alpha.guichet-citoyen.be",
            "https://beta.guichet-citoyen.be",
            "https://Saint-Hubert.guichet-citoyen.be",
            "https://saint-ghislain.guichet-citoyen.be",
        ]
    );
}

#[test]
fn test_list_name_miss_reports_empty() {
    let (outcome, out) = run(ListOptions {
        name: "zzz".into(),
        ..Default::default()
    });

    assert_eq!(outcome, Outcome::Empty);
    assert_eq!(out, "No Teleservices found.\n");
}

#[test]
fn test_list_empty_inventory() {
    yansi::disable();
    let mut out = Vec::new();
    let outcome = run_list(
        &common::config("http://unused"),
        Vec::new(),
        &ListOptions::default(),
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::Empty);
    assert_eq!(String::from_utf8(out).unwrap(), "No Teleservices found.\n");
}

#[test]
fn test_list_verbose_echoes_filters() {
    yansi::disable();
    let mut config = common::config("http://unused");
    config.verbose = true;
    let mut out = Vec::new();
    let opts = ListOptions {
        package: "pkgB".into(),
        url_only: true,
        ..Default::default()
    };

    run_list(&config, inventory(), &opts, &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Filtering teleservices for package pkgB\n"));
    assert!(out.contains("Filtering teleservices for name ''\n"));
    assert!(out.contains("https://beta.guichet-citoyen.be\n"));
}
