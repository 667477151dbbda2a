use std::fs;
use tokio::sync::RwLock;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use crate::utils::logging::*;

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::new());
}

#[derive(Debug, Deserialize)]
struct ConfigTable {
    #[serde(rename = "Config")]
    config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub serial_port: String, //COM-style identifier
    pub serial_baud_rate: u32, //baud
    pub serial_timeout: u64, //milliseconds
    pub frame_width: u32, //pixels
    pub frame_height: u32, //pixels
    pub center_tolerance: u32, //pixels
    pub step_degrees: u32, //degrees per frame
    pub recenter_threshold: u32, //consecutive missed frames
    pub recenter_angle: u32, //degrees
    pub initial_angle: u32, //degrees
    pub model_path: String, //path
    pub model_input_size: u32, //pixels
    pub iou_threshold: f32, //ratio
    pub loop_delay: u64, //microseconds
    pub http_server_bind_port: u16, //port
    pub window_title: String, //display window name
}

impl Config {
    pub fn new() -> Self {
        //Seriously, the program must be terminated.
        match fs::read_to_string("./tracker.toml") {
            Ok(toml_string) => {
                match toml::from_str::<ConfigTable>(&toml_string) {
                    Ok(config_table) => {
                        let config = config_table.config;
                        if !Self::validate(&config) {
                            logging_entry!(critical_entry!("Config", "Invalid configuration file"));
                            panic!("Invalid configuration file");
                        }
                        config
                    },
                    Err(err) => {
                        logging_entry!(critical_entry!("Config", "Unable to parse configuration file", format!("Err: {err}")));
                        panic!("Unable to parse configuration file");
                    },
                }
            },
            Err(err) => {
                logging_entry!(critical_entry!("Config", "Configuration file not found", format!("Err: {err}")));
                panic!("Configuration file not found");
            },
        }
    }

    pub async fn now() -> Config {
        CONFIG.read().await.clone()
    }

    pub fn validate(config: &Config) -> bool {
        !config.serial_port.is_empty()
            && config.serial_baud_rate > 0
            && Self::validate_millisecond(config.serial_timeout)
            && Self::validate_dimension(config.frame_width)
            && Self::validate_dimension(config.frame_height)
            && config.center_tolerance < config.frame_width / 2
            && Self::validate_step(config.step_degrees)
            && Self::validate_miss_threshold(config.recenter_threshold)
            && Self::validate_angle(config.recenter_angle)
            && Self::validate_angle(config.initial_angle)
            && !config.model_path.is_empty()
            && Self::validate_dimension(config.model_input_size)
            && Self::validate_ratio(config.iou_threshold)
            && !config.window_title.is_empty()
    }

    fn validate_millisecond(millisecond: u64) -> bool {
        millisecond <= 60000
    }

    fn validate_dimension(pixel: u32) -> bool {
        pixel > 0 && pixel <= 8192
    }

    fn validate_step(degrees: u32) -> bool {
        degrees > 0 && degrees <= 45
    }

    fn validate_miss_threshold(frames: u32) -> bool {
        frames > 0 && frames <= 10000
    }

    fn validate_angle(degrees: u32) -> bool {
        degrees <= 180
    }

    fn validate_ratio(ratio: f32) -> bool {
        ratio >= 0.0 && ratio <= 1.0
    }
}
