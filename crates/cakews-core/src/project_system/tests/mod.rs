mod tests_system;
