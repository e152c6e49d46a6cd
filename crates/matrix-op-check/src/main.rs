use matrix_op_check::scenario::Outputs;

fn main() -> anyhow::Result<()> {
    matrix_op_check::init_logger!();

    let report = matrix_op_check::run(&Outputs::expected())?;
    log::info!("all {} elements match", report.compared);
    Ok(())
}
