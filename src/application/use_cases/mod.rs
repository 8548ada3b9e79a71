/// Use cases - Application business logic
mod generate_credits;

pub use generate_credits::GenerateCreditsUseCase;
