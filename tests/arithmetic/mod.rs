use calperiod::{civil::date, Duration, Period, ToPeriod, Unit};

#[test]
fn normalize_carries_nanoseconds() -> crate::Result {
    let p = Period::constant(1, 2, 3, 4, 5, 6, 999_999_999);
    assert_eq!(p.normalized()?, p);

    let p = p.checked_add(1.nanosecond())?;
    assert_eq!(p, Period::constant(1, 2, 3, 4, 5, 6, 1_000_000_000));
    assert_eq!(p.normalized()?, Period::constant(1, 2, 3, 4, 5, 7, 0));
    assert_eq!(p.normalized()?.normalized()?, p.normalized()?);
    assert_eq!(Period::ZERO.normalized()?, Period::ZERO);
    Ok(())
}

#[test]
fn normalize_with_24_hour_days() -> crate::Result {
    let p = 1.month().days(1).hours(23).minutes(90);
    assert_eq!(p.normalized()?, 1.month().days(1).hours(24).minutes(30));
    assert_eq!(
        p.normalized_with_24_hour_days()?,
        1.month().days(2).minutes(30),
    );
    Ok(())
}

#[test]
fn to_duration_treats_days_as_24_hours() -> crate::Result {
    let p = Period::constant(0, 0, 1, 4, 5, 6, 7);
    let d = p.to_duration()?;
    assert_eq!(d, Duration::new(101_106, 7));
    assert_eq!((d.as_secs(), d.subsec_nanos()), (101_106, 7));

    let err = 1.month().to_duration().unwrap_err();
    assert!(err.is_non_fixed_unit());
    insta::assert_snapshot!(
        err,
        @"cannot convert period with non-zero months to a fixed length duration, since months do not have a fixed length",
    );
    Ok(())
}

#[test]
fn duration_to_period() -> crate::Result {
    let p = Period::try_from(Duration::new(101_106, 7))?;
    assert_eq!(p, 28.hours().minutes(5).seconds(6).nanoseconds(7));

    let p = Period::try_from(Duration::new(-2, 500_000_000))?;
    assert_eq!(p, (-1).second().nanoseconds(-500_000_000));

    let unsigned = core::time::Duration::try_from(Duration::new(3, 4))?;
    assert_eq!(unsigned, core::time::Duration::new(3, 4));
    let err = core::time::Duration::try_from(Duration::new(-3, 4)).unwrap_err();
    assert!(err.is_invalid_argument());
    Ok(())
}

#[test]
fn overflow_guard() -> crate::Result {
    let p = Period::of(i64::from(i32::MAX), Unit::Year)?;
    let err = p.checked_add((Unit::Year, 1)).unwrap_err();
    assert!(err.is_overflow());

    let err = Period::ZERO.checked_div(0).unwrap_err();
    assert!(err.is_division_by_zero());

    assert!(Period::of(i64::MAX, Unit::Millisecond).unwrap_err().is_overflow());
    assert!(i32::MIN.days().checked_neg().unwrap_err().is_overflow());
    assert!(i32::MAX.hours().checked_mul(2).unwrap_err().is_overflow());
    assert!(i32::MIN.minutes().checked_div(-1).unwrap_err().is_overflow());
    Ok(())
}

#[test]
fn additive_identity_and_inverse() -> crate::Result {
    let periods = [
        Period::ZERO,
        Period::constant(1, -2, 3, -4, 5, -6, 7),
        Period::constant(i32::MAX, 0, 0, 0, 0, 0, i64::MAX),
    ];
    for p in periods {
        assert_eq!(p.checked_add(Period::ZERO)?, p);
        assert!(p.checked_add(p.checked_neg()?)?.is_zero());
        assert_eq!(p.checked_sub(p)?, Period::ZERO);
    }
    Ok(())
}

#[test]
fn totals() -> crate::Result {
    let p = 1.year().months(14).days(2).hours(3).minutes(4).seconds(5);
    assert_eq!(p.total_years()?, 2);
    assert_eq!(p.total_months()?, 26);
    assert!(p.total_days_with_24_hour_days().unwrap_err().is_non_fixed_unit());
    assert_eq!(2.days().hours(3).total_days_with_24_hour_days()?, 2);
    assert_eq!(p.without_date_fields().total_minutes()?, 184);
    assert!(p.total_hours().unwrap_err().is_non_fixed_unit());
    assert_eq!(
        p.without_date_fields().total_seconds()?,
        3 * 3_600 + 4 * 60 + 5,
    );
    assert_eq!(
        2.days().hours(-1).total_hours_with_24_hour_days()?,
        47,
    );
    assert_eq!(1.second().nanoseconds(-1).total_nanoseconds()?, 999_999_999);
    Ok(())
}

#[test]
fn dates() -> crate::Result {
    let d = date(2024, 1, 31);
    assert_eq!(d.checked_add(1.month())?, date(2024, 2, 29));
    assert_eq!(d.checked_add(1.year().months(1))?, date(2025, 2, 28));
    assert_eq!(d.checked_sub(2.months().days(1))?, date(2023, 11, 29));
    assert_eq!(d.checked_add(Period::of(2, Unit::Week)?)?, date(2024, 2, 14));

    let err = d.checked_add(1.day().hours(1)).unwrap_err();
    assert!(err.is_invalid_argument());
    insta::assert_snapshot!(
        err,
        @"failed to add period to date: a date can only be adjusted by years, months or days, but found non-zero hours in period",
    );
    Ok(())
}

#[test]
fn operators() {
    let p = 1.year().days(-2);
    assert_eq!(-p, (-1).year().days(2));
    assert_eq!(p * 3, 3.years().days(-6));
    assert_eq!(3 * p, 3.years().days(-6));
    assert_eq!(Period::default(), Period::ZERO);
}

#[test]
#[should_panic]
fn negate_panics_on_overflow() {
    let _ = -i32::MIN.years();
}
