use failsafe_dns_domain::{ForwardZone, ResolverEndpoint};

fn endpoint(s: &str) -> ResolverEndpoint {
    s.parse().unwrap()
}

#[test]
fn test_primary_zone_renders_single_plain_upstream() {
    let zone = ForwardZone::primary(endpoint("10.0.0.5"));
    let rendered = zone.render();

    assert!(rendered.starts_with("# Generated by failsafe-dns"));
    assert!(rendered.contains("forward-zone:\n"));
    assert!(rendered.contains("    name: \".\"\n"));
    assert!(rendered.contains("    forward-addr: 10.0.0.5@53\n"));
    assert!(!rendered.contains("forward-tls-upstream"));
    assert!(!rendered.contains("tls-cert-bundle"));
}

#[test]
fn test_backup_zone_renders_all_upstreams_with_tls() {
    let zone = ForwardZone::backup(
        vec![
            endpoint("1.1.1.1@853#cloudflare-dns.com"),
            endpoint("9.9.9.9@853#dns.quad9.net"),
        ],
        None,
    );
    let rendered = zone.render();

    assert!(rendered.contains("    forward-tls-upstream: yes\n"));
    assert!(rendered.contains("    forward-addr: 1.1.1.1@853#cloudflare-dns.com\n"));
    assert!(rendered.contains("    forward-addr: 9.9.9.9@853#dns.quad9.net\n"));
    assert!(!rendered.contains("server:"));
}

#[test]
fn test_backup_zone_renders_cert_bundle_stanza() {
    let zone = ForwardZone::backup(
        vec![endpoint("1.1.1.1@853#cloudflare-dns.com")],
        Some("/etc/ssl/cert.pem".to_string()),
    );
    let rendered = zone.render();

    assert!(rendered.contains("server:\n"));
    assert!(rendered.contains("    tls-cert-bundle: \"/etc/ssl/cert.pem\"\n"));

    let server_pos = rendered.find("server:").unwrap();
    let zone_pos = rendered.find("forward-zone:").unwrap();
    assert!(server_pos < zone_pos, "server stanza must precede the zone");
}

#[test]
fn test_backup_zone_preserves_configured_order() {
    let zone = ForwardZone::backup(
        vec![
            endpoint("9.9.9.9@853#dns.quad9.net"),
            endpoint("1.1.1.1@853#cloudflare-dns.com"),
        ],
        None,
    );
    let rendered = zone.render();

    let quad9 = rendered.find("dns.quad9.net").unwrap();
    let cloudflare = rendered.find("cloudflare-dns.com").unwrap();
    assert!(quad9 < cloudflare);
}

#[test]
fn test_zones_for_different_states_differ() {
    let primary = ForwardZone::primary(endpoint("10.0.0.5"));
    let backup = ForwardZone::backup(vec![endpoint("1.1.1.1@853#cloudflare-dns.com")], None);
    assert_ne!(primary, backup);
    assert_ne!(primary.render(), backup.render());
}
