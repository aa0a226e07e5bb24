use crate::fixture_path::FixtureSource;
use crate::output::print_json;
use traverse_core::traversal::Block;

pub fn run(source: &FixtureSource, block: Option<Block>, json: bool) -> anyhow::Result<()> {
    let fixture = source.load()?;

    let blocks: Vec<Block> = match block {
        Some(b) => vec![b],
        None => Block::all().to_vec(),
    };

    if json {
        #[derive(serde::Serialize)]
        struct BlockOutput {
            block: Block,
            lines: Vec<String>,
        }

        let output: Vec<BlockOutput> = blocks
            .iter()
            .map(|&b| BlockOutput {
                block: b,
                lines: b.lines(&fixture),
            })
            .collect();
        return print_json(&output);
    }

    for b in blocks {
        for line in b.lines(&fixture) {
            println!("{line}");
        }
    }

    Ok(())
}
