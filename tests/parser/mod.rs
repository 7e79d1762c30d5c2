mod tests_lexer;
mod tests_readers;
