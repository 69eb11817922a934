use anyhow::Context;

fn main() -> anyhow::Result<()> {
    docpreview::run().context("docpreview failed")
}
