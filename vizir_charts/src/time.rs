// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar units for date-based axis strides.

/// A calendar unit an axis can stride by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "calendar unit names are self-describing")]
pub enum CalendarComponent {
    Era,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Weekday,
    WeekdayOrdinal,
    Quarter,
    WeekOfMonth,
    WeekOfYear,
    YearForWeekOfYear,
    Nanosecond,
    Calendar,
    TimeZone,
    IsLeapMonth,
}

/// The calendar system used to interpret [`CalendarComponent`] strides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "calendar system names are self-describing")]
pub enum CalendarIdentifier {
    #[default]
    Gregorian,
    Buddhist,
    Chinese,
    Coptic,
    EthiopicAmeteMihret,
    EthiopicAmeteAlem,
    Hebrew,
    Iso8601,
    Indian,
    Islamic,
    IslamicCivil,
    Japanese,
    Persian,
    RepublicOfChina,
    IslamicTabular,
    IslamicUmmAlQura,
}
