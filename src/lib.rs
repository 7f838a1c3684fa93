pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
    }

    pub mod calendar {
        pub mod dayclassification;
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod unitedstates;
        pub mod holidaycalendarmanager;
    }
}

pub use time::calendar::unitedstates::{is_federal_holiday, is_weekend};
