use clap::error::ErrorKind;
use clap::Parser;
use sonic_check::utils::{logger, validation::Validate};
use sonic_check::{CheckRunner, CliConfig, RestProber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(err) => {
            // 用法訊息走 stdout；缺參數以代碼 2 結束
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 2,
            };
            println!("{}", err);
            std::process::exit(code);
        }
    };

    logger::init_cli_logger();
    tracing::info!("Starting sonic-check against {}", config.host);

    // 驗證配置
    if let Err(e) = config.validate() {
        println!("{}", e);
        println!("Usage: sonic-check <HOST>");
        std::process::exit(2);
    }

    let prober = RestProber::new()?;
    let runner = CheckRunner::new(prober, config.target());

    // 探測失敗只會寫進報告，程序一律以 0 結束
    runner.run(&mut std::io::stdout()).await?;

    Ok(())
}
