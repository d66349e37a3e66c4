pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod holiday;
    pub mod dayinfo;
    pub mod rangeofdates;
    pub mod businessdayadjuster;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekdayshift;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod calendarerror;
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod precomputedcalendar;
        pub mod holidaycalendarmanager;
    }
}
