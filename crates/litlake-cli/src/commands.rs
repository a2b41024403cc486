use anyhow::Result;
use comfy_table::Table;
use litlake_cli::runner::{build_graph, run_pipeline};
use litlake_cli::types::PipelineResult;
use litlake_model::DataStore;
use litlake_transform::JobRegistry;

use crate::cli::{GraphArgs, PipelineArgs};
use crate::summary::apply_table_style;

pub fn run_pipeline_command(args: &PipelineArgs) -> Result<PipelineResult> {
    run_pipeline(&args.data_root, args.area.map(Into::into))
}

pub fn run_graph(args: &GraphArgs) -> Result<()> {
    let store = DataStore::new(&args.data_root);
    let outputs = build_graph(&store, args.json_out.clone(), args.dot_out.clone())?;
    println!("Lineage graph: {} nodes", outputs.nodes);
    println!("Flat JSON: {}", outputs.flat_json.display());
    println!("DOT: {}", outputs.dot.display());
    Ok(())
}

pub fn run_datasets() -> Result<()> {
    let registry = JobRegistry::standard();
    let mut table = Table::new();
    table.set_header(vec!["Area", "Dataset", "Sources", "Columns"]);
    apply_table_style(&mut table);
    for job in registry.jobs() {
        let target = job.target();
        let sources: Vec<String> = job
            .sources()
            .iter()
            .map(|dep| format!("{}/{}.{}", dep.area, dep.kind, dep.format.extension()))
            .collect();
        let columns: Vec<String> = job
            .schema()
            .columns()
            .iter()
            .map(|spec| spec.name.clone())
            .collect();
        table.add_row(vec![
            target.area.as_str().to_string(),
            target.kind.as_str().to_string(),
            sources.join(", "),
            columns.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}
