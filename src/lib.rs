pub mod configuration;

pub mod comparison {
    pub mod comparisonentry;
    pub mod comparisonset;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod sampledcurve;
    }
    pub mod round;
}

pub mod model {
    pub mod accumulationcurve;
    pub mod breakdown;
    pub mod questresult;
    pub mod questmodel;
}

pub mod objectwithuuid;

pub mod quest {
    pub mod questerror;
    pub mod lane;
    pub mod category;
    pub mod questconfig;
    pub mod questconfigmanager;
    pub mod scenario;
}

pub mod report {
    pub mod chart;
    pub mod textreport;
}

pub mod solver {
    pub mod completion;
    pub mod completionsolver;
    pub mod numericsolver;
}

pub mod time {
    pub mod gameclock;
}
