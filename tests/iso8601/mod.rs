use calperiod::{
    fmt::iso8601::{PeriodParser, PeriodPrinter},
    Duration, Period, ToPeriod,
};

static PARSER: PeriodParser = PeriodParser::new();
static PRINTER: PeriodPrinter = PeriodPrinter::new();

fn position(input: &str) -> usize {
    let err = PARSER.parse_period(input).unwrap_err();
    assert!(err.is_parse(), "{input:?}: {err}");
    assert_eq!(err.parse_input(), Some(input));
    err.parse_position().unwrap()
}

#[test]
fn fractional_seconds() -> crate::Result {
    let p = PARSER.parse_period("PT0.1S")?;
    assert_eq!(p, Period::from_time_fields(0, 0, 0, 100_000_000));
    assert_eq!(PRINTER.period_to_string(&p), "PT0.1S");

    assert_eq!(PARSER.parse_period("PT0,1S")?, p);
    assert_eq!(PARSER.parse_period("PT-0.1S")?, -p);
    assert_eq!(
        PARSER.parse_period("PT-1.000000001S")?,
        (-1).second().nanoseconds(-1),
    );
    Ok(())
}

#[test]
fn signs_and_case() -> crate::Result {
    let p = 1.year().months(-2).days(3).hours(-4).minutes(5).seconds(-6);
    assert_eq!(PARSER.parse_period("P1Y-2M3DT-4H5M-6S")?, p);
    assert_eq!(PARSER.parse_period("+P1Y-2M+3DT-4H5M-6S")?, p);
    assert_eq!(PARSER.parse_period("-P-1Y2M-3DT4H-5M6S")?, p);
    assert_eq!(PARSER.parse_period("p1y-2m3dt-4h5m-6s")?, p);
    assert_eq!(PARSER.parse_period("pt0s")?, Period::ZERO);
    assert_eq!(PARSER.parse_period("P0D")?, Period::ZERO);
    Ok(())
}

#[test]
fn error_positions() {
    let tests = [
        ("", 0),
        ("1Y", 0),
        ("-X", 1),
        ("P", 1),
        ("PT", 1),
        ("P1YT", 3),
        ("P1Y1Y", 3),
        ("P1D1M", 3),
        ("P1H", 1),
        ("PT1Y", 2),
        ("PT1H1H", 4),
        ("P1X", 1),
        ("P1", 1),
        ("PX", 1),
        ("P1.5D", 1),
        ("PT1.S", 2),
        ("PT1.1234567890S", 2),
        ("PT1HT1M", 4),
        ("P1YX", 3),
        ("PT123456789123456789123456789S", 2),
        ("PT-2147483649S", 3),
    ];
    for (input, want) in tests {
        assert_eq!(position(input), want, "position for {input:?}");
    }
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(
        PARSER.parse_period("PT123456789123456789123456789S").unwrap_err(),
        @r###"failed to parse "PT123456789123456789123456789S" as an ISO 8601 period at position 2: value for seconds is too big or too small to fit into a period"###,
    );
    insta::assert_snapshot!(
        PARSER.parse_period("P1D1Y").unwrap_err(),
        @r###"failed to parse "P1D1Y" as an ISO 8601 period at position 3: found years out of order, units must appear at most once and from largest to smallest"###,
    );
    insta::assert_snapshot!(
        PARSER.parse_period("").unwrap_err(),
        @r###"failed to parse "" as an ISO 8601 period at position 0: an empty string is not a valid period"###,
    );
}

#[test]
fn round_trip() -> crate::Result {
    let periods = [
        Period::ZERO,
        Period::constant(1, 2, 3, 4, 5, 6, 999_999_999),
        Period::constant(-1, -2, -3, -4, -5, -6, -999_999_999),
        Period::constant(i32::MAX, i32::MIN, 0, 0, 0, i32::MIN, 0),
        (-1).nanosecond(),
        1.day().seconds(0),
    ];
    for p in periods {
        let printed = PRINTER.period_to_string(&p);
        assert_eq!(PARSER.parse_period(&printed)?, p, "{printed}");
        assert_eq!(printed.parse::<Period>()?, p);
        assert_eq!(p.to_string(), printed);
    }
    Ok(())
}

#[test]
fn durations() -> crate::Result {
    assert_eq!(
        PARSER.parse_duration("P1DT4H5M6.000000007S")?,
        Duration::new(101_106, 7),
    );
    let d = Duration::new(-5, 250_000_000);
    assert_eq!(PRINTER.duration_to_string(&d), "PT-4.75S");
    assert_eq!(PRINTER.duration_to_string(&d).parse::<Duration>()?, d);
    assert!(PARSER.parse_duration("P1Y").unwrap_err().is_non_fixed_unit());
    assert!(PARSER.parse_duration("P1Q").unwrap_err().is_parse());
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn serde_json() {
    let p = 1.year().days(2).nanoseconds(500_000_000);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#""P1Y2DT0.5S""#);
    assert_eq!(serde_json::from_str::<Period>(&json).unwrap(), p);

    let d = Duration::new(90, 0);
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, r#""PT90S""#);
    assert_eq!(serde_json::from_str::<Duration>(&json).unwrap(), d);

    let err = serde_json::from_str::<Period>(r#""P1X""#).unwrap_err();
    assert!(err.to_string().contains("unrecognized unit designator"));
}
