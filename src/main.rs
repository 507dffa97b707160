use actix_web::{App, HttpServer, middleware::Logger};
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use chrono::Local;  // timestamp in log lines

use lottery_backend::{
    AppState,
    config::Config,
    database::create_store,
    external::DirectoryCapability,
    middlewares::create_cors,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建内存存储（按配置写入内置抽奖配置）
    let store = create_store(&config.storage)
        .await
        .expect("Failed to initialise lottery store");

    // 目录选择能力（关闭时导出/导入返回 503）
    let capability = DirectoryCapability::from_config(&config.directory);
    if !capability.is_available() {
        log::warn!("Directory picker disabled, export/import will be unavailable");
    }

    let state = AppState::new(store, &config, capability);

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .configure(swagger_config)
            .configure(move |cfg| state.configure(cfg))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
