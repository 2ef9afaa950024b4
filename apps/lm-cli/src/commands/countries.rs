// countries.rs — List the lifespan table.

use lm_lifespan::LifespanTable;

use crate::render;

pub fn execute() -> anyhow::Result<()> {
    print!("{}", render::countries_table(&LifespanTable::builtin()));
    Ok(())
}
