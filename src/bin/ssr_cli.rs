use anyhow::{bail, Result};
use clap::{Arg, ArgMatches, Command};
use ssr_dct::core::driver::{ImageReconstructionDriver, ReconstructionDriver};
use ssr_dct::core::signal::{gaussian_luma, gradient_luma, linspace_signal};
use ssr_dct::core::types::{ImageReconstructionConfig, ReconstructionConfig, SampleRegion};
use std::process;

fn main() {
    env_logger::init();

    let matches = Command::new("SSR CLI")
        .version("0.1.0")
        .about("희소 샘플 DCT 재구성 데모 도구")
        .subcommand(
            Command::new("signal")
                .about("1차원 선형 신호 재구성")
                .arg(
                    Arg::new("num-samples")
                        .long("num-samples")
                        .short('n')
                        .value_name("COUNT")
                        .help("추출할 샘플 개수")
                        .default_value("100"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("SEED")
                        .help("난수 시드 (결정적 실행용)"),
                ),
        )
        .subcommand(
            Command::new("image")
                .about("2차원 합성 휘도장 재구성")
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .value_name("ROWS")
                        .help("휘도장 행 개수")
                        .default_value("64"),
                )
                .arg(
                    Arg::new("cols")
                        .long("cols")
                        .value_name("COLS")
                        .help("휘도장 열 개수")
                        .default_value("64"),
                )
                .arg(
                    Arg::new("pattern")
                        .long("pattern")
                        .value_name("PATTERN")
                        .help("합성 패턴 (gradient 또는 gaussian)")
                        .default_value("gradient"),
                )
                .arg(
                    Arg::new("sample-factor")
                        .long("sample-factor")
                        .short('f')
                        .value_name("FACTOR")
                        .help("전체 픽셀 대비 샘플 비율")
                        .default_value("0.5"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("SEED")
                        .help("난수 시드 (결정적 실행용)"),
                )
                .arg(
                    Arg::new("region")
                        .long("region")
                        .value_name("R0,R1,C0,C1")
                        .help("샘플 추첨을 제한할 반열린 직사각 영역"),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("signal", sub)) => run_signal(sub),
        Some(("image", sub)) => run_image(sub),
        _ => {
            eprintln!("사용법: ssr_cli <signal|image> --help");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("오류: {}", e);
        process::exit(1);
    }
}

fn run_signal(matches: &ArgMatches) -> Result<()> {
    let num_samples: usize = matches.get_one::<String>("num-samples").unwrap().parse()?;
    let seed: Option<u64> = matches
        .get_one::<String>("seed")
        .map(|s| s.parse())
        .transpose()?;

    let config = ReconstructionConfig {
        num_samples,
        seed,
        show_progress: true,
        ..Default::default()
    };

    let signal = linspace_signal(100);
    let driver = ReconstructionDriver::new(signal.view(), &config)?;
    let result = driver.run()?;

    println!("=== 1차원 재구성 완료 ===");
    println!("   - 샘플 개수: {}", result.stats.num_samples);
    println!("   - 초기 RMSE: {:.6}", result.stats.initial_rmse);
    println!("   - 최종 RMSE: {:.6}", result.stats.final_rmse);
    println!("   - 소요 시간: {:.1}ms", result.stats.elapsed_ms);
    Ok(())
}

fn run_image(matches: &ArgMatches) -> Result<()> {
    let rows: usize = matches.get_one::<String>("rows").unwrap().parse()?;
    let cols: usize = matches.get_one::<String>("cols").unwrap().parse()?;
    let sample_factor: f32 = matches.get_one::<String>("sample-factor").unwrap().parse()?;
    let seed: Option<u64> = matches
        .get_one::<String>("seed")
        .map(|s| s.parse())
        .transpose()?;
    let region = matches
        .get_one::<String>("region")
        .map(|s| parse_region(s))
        .transpose()?;

    let pattern = matches.get_one::<String>("pattern").unwrap().as_str();
    let luma = match pattern {
        "gradient" => gradient_luma(rows, cols),
        "gaussian" => gaussian_luma(rows, cols),
        other => bail!("알 수 없는 패턴: {}", other),
    };

    let config = ImageReconstructionConfig {
        sample_factor,
        seed,
        region,
        show_progress: true,
        ..Default::default()
    };

    let driver = ImageReconstructionDriver::new(luma.view(), &config)?;
    let result = driver.run()?;

    let mid = rows / 2;
    let slice = result.reconstruction.row(mid);
    let slice_mean = slice.mean().unwrap_or(0.0);

    println!("=== 2차원 재구성 완료 ===");
    println!("   - 휘도장 크기: {}x{}", rows, cols);
    println!("   - 샘플 개수: {}", result.stats.num_samples);
    println!("   - 초기 RMSE: {:.6}", result.stats.initial_rmse);
    println!("   - 최종 RMSE: {:.6}", result.stats.final_rmse);
    println!("   - {}행 슬라이스 평균: {:.4}", mid, slice_mean);
    println!("   - 소요 시간: {:.1}ms", result.stats.elapsed_ms);
    Ok(())
}

fn parse_region(value: &str) -> Result<SampleRegion> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 4 {
        bail!("영역 형식은 R0,R1,C0,C1 입니다: {}", value);
    }
    Ok(SampleRegion {
        row_start: parts[0].trim().parse()?,
        row_end: parts[1].trim().parse()?,
        col_start: parts[2].trim().parse()?,
        col_end: parts[3].trim().parse()?,
    })
}
