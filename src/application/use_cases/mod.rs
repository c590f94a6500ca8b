/// Use cases module containing application business logic orchestration
mod generate_vex;

pub use generate_vex::GenerateVexUseCase;
