use clap::Parser;

use super::{CrawlerArgs, GeneratorArgs};

#[test]
fn generator_flag_values_are_parsed() -> Result<(), String> {
    let args = GeneratorArgs::try_parse_from([
        "proxyload",
        "--proxy-config",
        "acme:1.1.1.1",
        "--rate",
        "5",
        "--destinations",
        "a.example,b.example",
        "--metrics-port",
        "9100",
    ])
    .map_err(|err| err.to_string())?;

    assert_eq!(args.proxy_config, "acme:1.1.1.1");
    assert_eq!(args.request_rate, 5);
    assert_eq!(args.metrics_port, 9100);
    assert_eq!(
        args.destination_list(),
        vec!["a.example".to_owned(), "b.example".to_owned()]
    );
    Ok(())
}

#[test]
fn zero_rate_is_rejected() {
    let result = GeneratorArgs::try_parse_from(["proxyload", "--rate", "0"]);
    assert!(result.is_err());
}

#[test]
fn destination_list_trims_and_drops_blanks() -> Result<(), String> {
    let args =
        GeneratorArgs::try_parse_from(["proxyload", "--destinations", " a.example , ,b.example,"])
            .map_err(|err| err.to_string())?;
    assert_eq!(
        args.destination_list(),
        vec!["a.example".to_owned(), "b.example".to_owned()]
    );
    Ok(())
}

#[test]
fn blank_destinations_fall_back_to_the_default() -> Result<(), String> {
    let args = GeneratorArgs::try_parse_from(["proxyload", "--destinations", " , "])
        .map_err(|err| err.to_string())?;
    assert_eq!(args.destination_list(), vec!["httpbin.org".to_owned()]);
    Ok(())
}

#[test]
fn crawler_port_flag_overrides_the_default() -> Result<(), String> {
    let args = CrawlerArgs::try_parse_from(["proxyload-crawler", "--port", "9000"])
        .map_err(|err| err.to_string())?;
    assert_eq!(args.port, 9000);
    Ok(())
}
