mod graphql;
mod resolvers;
mod routes;

pub use graphql::{GraphQLError, GraphQLRequest, GraphQLResponse, Operation, OperationKind};
pub use resolvers::execute;
pub use routes::{AppState, api_routes};
