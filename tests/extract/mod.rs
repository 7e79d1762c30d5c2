mod tests_constructs;
mod tests_schema;
mod tests_tolerance;
