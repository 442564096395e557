//! 設定單匯入範例
//!
//! 用法：`cargo run --example import_setup_sheet [setup-sheet.csv]`
//! 未指定檔案時使用內建的設定單範本。

use anyhow::Context;
use tooling::domain::ToolingConfig;
use tooling::import::Worksheet;
use tooling::store::{apply_parsed_tools, seed_demo_data};
use tooling::{InMemoryCatalog, OperatorService, SetupSheetParser};

const SAMPLE_SHEET: &str = "\
Part #,67890-02,,,,
Operation,OP10,,,,
,Tooling Setup,,,,
#,Tool,Manufacture #,Tool Life,Holder,Stickout
1,3/8 Endmill,GARR 31250,120 min,CAT40-ER32-4,1.50
2,#7 Drill,OSG 8600,300 holes,CAT40-ER16-3,2.00
3,1/4-20 Tap,,,CAT40-ER16-3,1.75
4,Boring Bar .750,Sandvik A16R,,CAT40-BB,3.00
Comments:,Deburr all edges,,,,
";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ToolingConfig::default();

    let sheet = match std::env::args().nth(1) {
        Some(path) => Worksheet::from_csv_path(&path).with_context(|| format!("無法讀取 {}", path))?,
        None => Worksheet::from_csv_reader("67890-02-OP10", SAMPLE_SHEET.as_bytes())?,
    };

    let parser = SetupSheetParser::new(config.importer.clone());
    let tools = parser.parse(&sheet)?;

    println!("===== 設定單 {} =====", sheet.name());
    for tool in &tools {
        println!(
            "T{:<3} {:<20} {:<14} 刀把 {:<14} 伸出 {}",
            tool.tool_number, tool.description, tool.manufacturer_part_number, tool.holder, tool.stick_out
        );
    }

    let mut catalog = InMemoryCatalog::new();
    seed_demo_data(&mut catalog)?;

    let operation_id = OperatorService::new(&catalog)
        .part_operations("67890-02", None)
        .first()
        .map(|operation| operation.id)
        .context("找不到零件 67890-02 的工序")?;

    let outcome = apply_parsed_tools(&mut catalog, operation_id, &tools)?;
    println!("\n{}", serde_json::to_string_pretty(&outcome)?);

    let service = OperatorService::new(&catalog).with_config(config.aggregator);
    let summary = service.operation_readiness(operation_id)?;
    println!(
        "工序刀具 {} 組：完全可用 {}，部分可用 {}，不可用 {}",
        summary.total(),
        summary.fully_available,
        summary.partially_available,
        summary.not_available
    );

    Ok(())
}
