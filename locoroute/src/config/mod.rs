mod analysis_configuration;

pub use analysis_configuration::AnalysisConfiguration;
