mod tests_project;
