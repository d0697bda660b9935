use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short = 'd', long, default_value = "data")]
    data_dir: String,

    #[arg(short = 'o', long, default_value = "output")]
    output_dir: String,

    #[arg(short = 'y', long, value_delimiter = ',', default_values_t = vec![2020, 2050, 2075, 2099])]
    years: Vec<u32>,

    #[arg(short, long, default_value_t = true)]
    parallel: bool,

    #[arg(long, help = "Replace existing output files instead of skipping them", default_value_t = false)]
    overwrite: bool,

    #[arg(long, help = "Write a validation report against known wind farms", default_value_t = false)]
    validate: bool,

    #[arg(long, help = "Write outputs under a timestamped subdirectory", default_value_t = false)]
    timestamped_output: bool,

    #[arg(long, help = "City population file used to project demand when a year's demand CSV is missing", default_value = "city_population.csv")]
    population_file: String,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

// Add getter methods for all fields
impl Args {
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn years(&self) -> &[u32] {
        &self.years
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn validate(&self) -> bool {
        self.validate
    }

    pub fn timestamped_output(&self) -> bool {
        self.timestamped_output
    }

    pub fn population_file(&self) -> &str {
        &self.population_file
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
