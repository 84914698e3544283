use contact_manager::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    run_app()
}
