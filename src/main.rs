//! Phishing Detector - Terminal Client Entry Point

mod constants;
mod logic;
mod ui;

use std::io::Write;

use logic::backend::{ApiClient, ApiConfig};
use logic::controller::PageController;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ApiConfig::default();
    log::info!(
        "Starting {} client v{} (backend: {})",
        constants::APP_NAME,
        constants::APP_VERSION,
        config.base_url
    );

    let mut controller = PageController::new(ApiClient::new(config));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        repl(&mut controller).await;
        return;
    }

    // One-shot mode: check the URL argument, then run the optional flags
    let mut url: Option<String> = None;
    let mut want_info = false;
    let mut want_save = false;
    for arg in &args {
        match arg.as_str() {
            "--model-info" => want_info = true,
            "--save" => want_save = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => url = Some(other.to_string()),
        }
    }

    if let Some(url) = url {
        controller.check_url(&url).await;
        if want_save {
            report_save(&controller);
        }
    }
    if want_info {
        controller.show_model_info().await;
    }
}

async fn repl(controller: &mut PageController) {
    println!("{} v{}", constants::APP_NAME, constants::APP_VERSION);
    println!("Nhập URL để kiểm tra, hoặc lệnh: info | save | help | quit");

    let stdin = std::io::stdin();
    loop {
        print!("\nphish> ");
        if std::io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        match line.trim() {
            "quit" | "exit" => break,
            "help" => print_usage(),
            "info" => controller.show_model_info().await,
            "save" => report_save(controller),
            input => controller.check_url(input).await,
        }
    }
}

fn report_save(controller: &PageController) {
    match controller.save_results() {
        Ok(path) => {
            let checked_at = controller
                .last_result()
                .map(|s| s.checked_at.format(" (kiểm tra lúc %H:%M:%S UTC)").to_string())
                .unwrap_or_default();
            ui::notice(&format!("💾 Đã lưu kết quả vào {}{}", path.display(), checked_at));
        }
        Err(e) => ui::alert(&e.to_string()),
    }
}

fn print_usage() {
    println!("Cách dùng:");
    println!("  phish-checker <url> [--save] [--model-info]   kiểm tra một URL");
    println!("  phish-checker                                 chế độ tương tác");
    println!();
    println!("Lệnh tương tác:");
    println!("  <url>   kiểm tra URL");
    println!("  info    xem thông tin mô hình");
    println!("  save    lưu kết quả gần nhất ra {}", constants::CSV_FILENAME);
    println!("  quit    thoát");
    println!();
    println!("Biến môi trường: PHISH_API_URL, PHISH_API_TIMEOUT");
}
