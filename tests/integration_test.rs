//! Integration tests for ipv4-tools
//!
//! These tests go through the public API the way a caller would: parse,
//! classify, build blocks and walk them.

use ipv4_tools::{Address, AddressBlock, AddressClass, IpVersion, Netmask, Octet, Range, Subnet};

fn ip(s: &str) -> Address {
    Address::from_string(s).expect("Failed to parse address")
}

#[test]
fn test_address_round_trips() {
    for n in [0i64, 1, 255, 256, 0x0A000001, 3232235786, 0xFFFFFFFE, 0xFFFFFFFF] {
        let address = Address::from_integer(n).expect("Valid integer rejected");
        assert_eq!(i64::from(address.as_integer()), n);
        let text = address.to_string();
        assert_eq!(Address::from_string(&text).unwrap(), address);
    }

    let octets: [Octet; 4] = [192.into(), 168.into(), 1.into(), 10.into()];
    let address = Address::from_array(&octets).unwrap();
    assert_eq!(address.to_string(), "192.168.1.10");
    assert_eq!(address.as_integer(), 3232235786);
    assert_eq!(address.get_class(), AddressClass::C);
    assert_eq!(address.version(), IpVersion::V4);
}

#[test]
fn test_address_edges() {
    assert!(Address::from_integer(0xFFFFFFFF)
        .unwrap()
        .next()
        .unwrap_err()
        .is_range());
    assert!(Address::from_integer(0)
        .unwrap()
        .previous()
        .unwrap_err()
        .is_range());
}

#[test]
fn test_private_classification() {
    assert!(ip("10.0.0.1").is_rfc1918());
    assert!(ip("100.64.0.1").is_rfc6598());
    assert!(!ip("8.8.8.8").is_private());
    assert!(ip("192.168.1.10").is_private());
}

#[test]
fn test_netmask_cidr_round_trip() {
    for cidr in 0..=32u8 {
        let netmask = Netmask::from_cidr(cidr).unwrap();
        assert_eq!(netmask.as_cidr(), cidr);
        assert_eq!(netmask.count(), 1u64 << (32 - cidr));
        assert_eq!(Netmask::from_string(&netmask.to_string()).unwrap(), netmask);
    }
}

#[test]
fn test_range_properties() {
    let pairs = [
        ("0.0.0.0", "0.0.0.0"),
        ("10.0.0.1", "10.0.3.7"),
        ("0.0.0.0", "255.255.255.255"),
    ];
    for (a, b) in pairs {
        let (a, b) = (ip(a), ip(b));
        let range = Range::new(a, b);
        assert_eq!(
            range.count(),
            u64::from(b.as_integer()) - u64::from(a.as_integer()) + 1
        );
        assert!(range.contains(&a) && range.contains(&b));
        let same = range.shift(0).unwrap();
        assert!(same.matches(&range));
    }
}

#[test]
fn test_subnet_scenarios() {
    let subnet = Subnet::from_cidr(ip("10.0.0.0"), 24, true).unwrap();
    assert_eq!(subnet.network_address(), ip("10.0.0.0"));
    assert_eq!(subnet.broadcast_address(), ip("10.0.0.255"));
    assert_eq!(subnet.count(), 256);

    let previous = subnet.shift(-1).unwrap();
    assert!(previous.matches(&Subnet::from_cidr(ip("9.255.255.0"), 24, true).unwrap()));

    let relaxed = Subnet::from_string("10.2.4.1/30", false).unwrap();
    assert_eq!(relaxed.network_address(), ip("10.2.4.0"));
    assert_eq!(relaxed.broadcast_address(), ip("10.2.4.3"));

    let err = Subnet::from_cidr(ip("255.255.255.253"), 30, true).unwrap_err();
    assert!(err.is_range());
}

#[test]
fn test_subnet_walk() {
    let subnet: Subnet = "192.168.10.0/29".parse().unwrap();
    let hosts: Vec<String> = subnet.iter().map(|a| a.to_string()).collect();
    assert_eq!(hosts.len(), 8);
    assert_eq!(hosts.first().unwrap(), "192.168.10.0");
    assert_eq!(hosts.last().unwrap(), "192.168.10.7");
    assert!(subnet.is_in(&Subnet::from_cidr(ip("192.168.0.0"), 16, true).unwrap()));
    assert!(ip("192.168.10.5").is_in(&subnet));
    assert!(subnet.iter().all(|a| a.is_rfc1918()));
}

#[test]
fn test_serde_json_document() {
    let subnets: Vec<Subnet> =
        serde_json::from_str(r#"["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"]"#)
            .expect("Failed to read subnet list");
    assert_eq!(subnets.len(), 3);
    assert_eq!(subnets[1].broadcast_address(), ip("172.31.255.255"));
    let json = serde_json::to_string(&subnets).unwrap();
    assert_eq!(json, r#"["10.0.0.0/8","172.16.0.0/12","192.168.0.0/16"]"#);
}
