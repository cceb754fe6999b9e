use std::path::PathBuf;

use clap::Parser;

use hvac_load_toolbox::{app, config, i18n, load, ui_cli};

/// 명령행 옵션. 입력 파일을 주면 일괄 계산, 없으면 대화형 메뉴를 실행한다.
#[derive(Parser)]
#[command(name = "hvac_load_toolbox", version, about = "냉방부하 계산 툴박스")]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 방 정의 TOML 파일 경로
    #[arg(long)]
    input: Option<PathBuf>,
    /// 결과 TOML 저장 경로 (--input과 함께 사용)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);

    if let Some(input_path) = cli.input {
        let content = std::fs::read_to_string(&input_path)?;
        let input: load::RoomLoadInput = toml::from_str(&content)?;
        let result = load::compute_room_load(&input);
        ui_cli::print_result(&tr, &result);
        if let Some(out) = cli.output {
            std::fs::write(&out, toml::to_string_pretty(&result)?)?;
        }
        return Ok(());
    }

    app::run(&mut cfg, &tr)?;
    Ok(())
}
