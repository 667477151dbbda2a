use tokio::time::sleep;
use std::time::Duration;
use lazy_static::lazy_static;
use actix_web::{App, HttpServer, web};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::utils::config::Config;
use crate::utils::logging::*;
use crate::utils::log_entry::web::WebEntry;
use crate::management::run_manager::RunManager;
use crate::web::page::{default, launch, log};

lazy_static! {
    static ref MANAGER: RwLock<Manager> = RwLock::new(Manager::new());
}

pub struct Manager {
    terminate: bool,
}

impl Manager {
    fn new() -> Self {
        Self {
            terminate: false,
        }
    }

    pub async fn instance() -> RwLockReadGuard<'static, Self> {
        MANAGER.read().await
    }

    pub async fn instance_mut() -> RwLockWriteGuard<'static, Self> {
        MANAGER.write().await
    }

    pub async fn run() {
        Config::now().await;
        RunManager::run().await;
        let http_server = loop {
            let config = Config::now().await;
            let http_server = HttpServer::new(|| {
                App::new()
                    .service(launch::initialize())
                    .service(log::initialize())
                    .default_service(web::route().to(default::default_route))
            }).bind(format!("127.0.0.1:{}", config.http_server_bind_port));
            match http_server {
                Ok(http_server) => break http_server,
                Err(err) => {
                    logging_error!("Manager", WebEntry::BindError(config.http_server_bind_port, err.to_string()));
                    sleep(Duration::from_secs(1)).await;
                    continue;
                },
            }
        };
        logging_information!("Manager", "Web service ready.");
        logging_information!("Manager", "Online.");
        if let Err(err) = http_server.run().await {
            logging_error!("Manager", WebEntry::ServiceError(err.to_string()));
        }
    }

    pub async fn terminate() {
        logging_information!("Manager", "Terminating.");
        RunManager::terminate().await;
        Self::instance_mut().await.terminate = true;
        logging_information!("Manager", "Termination complete.");
    }
}
