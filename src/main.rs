use anyhow::Context;
use clap::Parser;
use portuaria_etl::adapters::report;
use portuaria_etl::core::aggregate::list_ports;
use portuaria_etl::domain::model::PortReport;
use portuaria_etl::domain::ports::Storage;
use portuaria_etl::utils::{logger, validation::Validate};
use portuaria_etl::{CliConfig, EtlEngine, LocalStorage, SchemaConfig, XlsxSource};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting portuaria-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let schema = match &config.schema {
        Some(path) => SchemaConfig::from_file(path)
            .with_context(|| format!("failed to load schema config from {}", path))?,
        None => SchemaConfig::default(),
    };

    let source = XlsxSource::new(config.input.as_str());
    let engine = EtlEngine::new(source, schema);

    let dataset = engine
        .build_dataset()
        .with_context(|| format!("failed to build the unified dataset from {}", config.input))?;

    let port = match config.port.as_deref() {
        Some(port) => port,
        None => {
            // The selection surface: same sorted list a UI selectbox gets.
            println!("Portos disponíveis:");
            for port in list_ports(&dataset) {
                println!("  {}", port);
            }
            return Ok(());
        }
    };

    match engine.report_for_port(&dataset, port)? {
        Some(port_report) => {
            print_table(&port_report);

            let storage = LocalStorage::new(&config.output_path);
            storage.write_file("report.csv", report::csv_report(&port_report)?.as_bytes())?;
            storage.write_file(
                "aggregates.json",
                report::json_aggregates(&port_report)?.as_bytes(),
            )?;

            tracing::info!("Report written to {}", config.output_path);
            println!("✅ Relatório salvo em {}", config.output_path);
        }
        None => {
            println!("Dados não disponíveis para o porto selecionado.");
        }
    }

    Ok(())
}

fn print_table(report: &PortReport) {
    println!("Movimentação para o Porto: {}", report.port);
    println!(
        "{:<6} {:>20} {:>20} {:>12}",
        "Ano", "Carga do Porto", "Carga Total", "Percentual"
    );
    for row in &report.rows {
        println!(
            "{:<6} {:>20} {:>20} {:>12}",
            row.year, row.port_cargo, row.total_cargo, row.percentage
        );
    }
}
