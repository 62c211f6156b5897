//! Supplyline Dashboard
//!
//! 终端版库存看板：并发拉取目录数据，本地聚合 KPI，再跑客户端
//! 表格管线渲染。子命令直接走目录服务的两个变更操作。

mod client;
mod config;
mod export;
mod kpi;
mod render;
mod table;

use std::env;
use std::process;

use anyhow::Result;
use tracing::info;

use supplyline_common::{Product, ProductFilter, ProductId};
use supplyline_telemetry::init_tracing;

use client::CatalogClient;
use config::DashboardConfig;
use kpi::{KpiSummary, warehouse_overview};
use table::TableState;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("info");

    let config = DashboardConfig::from_env();
    let client = CatalogClient::new(config.catalog_endpoint.clone());

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        None => show_dashboard(&client, &config).await,
        Some("update-demand") if args.len() == 4 => {
            let demand: i64 = args[3].parse().unwrap_or_else(|_| usage());
            let product = client.update_demand(&args[2], demand).await?;
            print_product(&product);
            Ok(())
        }
        Some("transfer") if args.len() == 6 => {
            let qty: i64 = args[5].parse().unwrap_or_else(|_| usage());
            let product = client
                .transfer_stock(&args[2], &args[3], &args[4], qty)
                .await?;
            print_product(&product);
            Ok(())
        }
        Some("show") if args.len() == 3 => show_product(&client, &args[2]).await,
        Some("export") if args.len() >= 4 => {
            export_rows(&client, &args[2], &args[3..]).await
        }
        _ => usage(),
    }
}

async fn show_dashboard(client: &CatalogClient, config: &DashboardConfig) -> Result<()> {
    info!("Loading dashboard data from {}", config.catalog_endpoint);

    // 三个读请求并发发出，任一失败整批失败，不做部分渲染
    let filter = ProductFilter::new();
    let (products, warehouses, kpis) = tokio::try_join!(
        client.products(&filter),
        client.warehouses(),
        client.kpis(&config.range),
    )?;

    let summary = KpiSummary::from_products(&products);
    let overview = warehouse_overview(&warehouses, &products);

    let mut table = TableState::new();
    table.set_page_size(config.page_size);

    println!();
    println!("  SUPPLYLINE — Inventory Dashboard ({})", config.range);
    println!();
    println!("{}", render::kpi_cards(&summary, products.len()));
    println!();
    println!("{}", render::sparkline(&kpis));
    println!();
    println!("{}", render::warehouse_table(&overview));
    println!();
    println!("{}", render::product_table(&table.page_view(&products)));
    println!();

    Ok(())
}

async fn show_product(client: &CatalogClient, id: &str) -> Result<()> {
    let products = client.products(&ProductFilter::new()).await?;
    match products.iter().find(|p| p.id.as_str() == id) {
        Some(product) => {
            print_product(product);
            println!(
                "  fill rate {:.1}%   surplus/deficit {}   days of cover {}d",
                product.fill_rate(),
                product.surplus(),
                product.days_of_cover()
            );
            Ok(())
        }
        None => {
            eprintln!("product {} not found", id);
            process::exit(1);
        }
    }
}

async fn export_rows(client: &CatalogClient, format: &str, ids: &[String]) -> Result<()> {
    let products = client.products(&ProductFilter::new()).await?;

    let mut table = TableState::new();
    for id in ids {
        table.toggle_select(&ProductId::new(id.as_str()));
    }

    let rows = table.selected_rows(&products);
    match format {
        "csv" => println!("{}", export::to_csv(&rows)),
        "json" => println!("{}", export::to_json(&rows)?),
        _ => usage(),
    }
    Ok(())
}

fn print_product(product: &Product) {
    println!(
        "  {} {} @ {}  stock {}  demand {}  [{}]",
        product.id,
        product.name,
        product.warehouse,
        product.stock,
        product.demand,
        product.status().label()
    );
}

fn usage() -> ! {
    eprintln!("Usage: supplyline-dashboard [COMMAND]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  (none)                           render the dashboard");
    eprintln!("  show <id>                        one product with its quick stats");
    eprintln!("  update-demand <id> <demand>      overwrite a product's demand forecast");
    eprintln!("  transfer <id> <from> <to> <qty>  move stock between warehouses");
    eprintln!("  export <csv|json> <id>...        export the selected rows");
    process::exit(2);
}
