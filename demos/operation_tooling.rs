//! 工序刀具可用性範例
//!
//! 載入示範資料，查詢零件 12345-01 的工序，輸出各工序刀具可用性與短缺明細，
//! 以及機台刀套內容與各零件設定單。

use anyhow::Context;
use tooling::store::seed_demo_data;
use tooling::{AvailabilitySummary, InMemoryCatalog, OperatorService};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("===== 工序刀具可用性 =====\n");

    // 步驟 1: 載入示範資料
    let mut catalog = InMemoryCatalog::new();
    seed_demo_data(&mut catalog).context("載入示範資料失敗")?;
    println!("[1] 示範資料已載入");

    // 步驟 2: 查詢零件與工序
    let service = OperatorService::new(&catalog);
    let part = service.part_by_number("12345-01")?;
    println!("[2] 零件 {} - {}", part.part.part_number, part.part.description);

    let operations = service.part_operations("12345-01", None);
    for operation in &operations {
        println!("\n--- {} (順序 {}) ---", operation.operation_name, operation.sequence_number);

        if let Some(sheet) = service.setup_sheet(operation.id) {
            println!("    設定單: {}", sheet.file_path.as_deref().unwrap_or("-"));
        }

        // 步驟 3: 匯總刀具可用性
        let reports = service.operation_tooling(operation.id, true)?;
        for report in &reports {
            println!("    {} => {}", report.assembly.assembly_name, report.availability_status);
            for component in &report.component_availability {
                println!(
                    "        {:<14} 需求 {:>3}  可用 {:>3}{}",
                    component.component.component_code,
                    component.quantity_required,
                    component.quantity_available,
                    if component.is_primary { "  (主要)" } else { "" }
                );
                for location in &component.locations {
                    println!(
                        "            @ {} [{}] × {}",
                        location.location_description, location.status, location.quantity
                    );
                }
            }
            for shortage in report.shortages() {
                println!(
                    "    ! 短缺 {} × {}",
                    shortage.component.component_code,
                    shortage.shortage()
                );
            }
        }

        let summary = AvailabilitySummary::from_reports(&reports);
        println!(
            "    摘要: 完全可用 {} / 部分可用 {} / 不可用 {}",
            summary.fully_available, summary.partially_available, summary.not_available
        );

        if let Some(first) = reports.first() {
            println!("\n    JSON:\n{}", serde_json::to_string_pretty(first)?);
        }
    }

    // 步驟 4: 機台刀套內容
    println!("\n===== 機台刀套 =====");
    for machine in catalog.list_machines(true) {
        let contents = catalog.machine_contents(machine.id)?;
        println!("{} ({} 筆)", machine.name, contents.len());
        for record in &contents {
            let code = catalog
                .component(record.component_id)
                .map(|c| c.component_code.as_str())
                .unwrap_or("?");
            println!("    {} [{}] × {}", code, record.status, record.quantity_on_hand);
        }
    }

    // 步驟 5: 依零件列出設定單
    println!("\n===== 設定單 =====");
    for part in service.setup_sheets_by_part() {
        println!("{}", part.part.part_number);
        for revision in &part.revisions {
            for operation in &revision.operations {
                for sheet in &operation.setup_sheets {
                    println!(
                        "    {} {} {}",
                        revision.revision.revision_code,
                        operation.operation.operation_name,
                        sheet.file_path.as_deref().unwrap_or("-")
                    );
                }
            }
        }
    }

    Ok(())
}
