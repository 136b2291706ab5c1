mod accessories;
mod contact;
mod features;
mod hero;
mod problem_solution;
mod specs;
mod trust_bar;

pub use accessories::Accessories;
pub use contact::CtaFooter;
pub use features::TechnicalFeatures;
pub use hero::Hero;
pub use problem_solution::ProblemSolution;
pub use specs::TechnicalSpecs;
pub use trust_bar::TrustBar;
