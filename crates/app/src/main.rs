use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod dispatch;
mod settings;

/// # Summary
/// 应用启动入口。
/// 解析命令行参数，初始化全局日志，随后把控制权交给调度层。
///
/// # Logic
/// 1. 解析命令行参数。
/// 2. 按 `-v` 初始化日志过滤级别（环境变量优先）。
/// 3. `--create` 时生成设置模板并退出。
/// 4. 否则执行通知调度流程，任一渠道失败则以错误退出。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if args.create {
        settings::write_template(&args.settings)?;
        info!("Settings template written to {}", args.settings.display());
        return Ok(());
    }

    dispatch::run(&args).await
}
