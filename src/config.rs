use regex::Regex;
use crate::algorithm::Algorithm;

#[derive(Clone)]
pub(crate) struct Config {
    algorithm: Algorithm,
    batch_capacity: usize,
    max_batches: Option<usize>,
    tasks: usize,
    parallel_depth: u32,
    field_separator: char,
    field_index: usize,
    header: bool,
    ignore_lines: Option<Regex>,
}

impl Config {
    pub(crate) fn new(
        algorithm: Algorithm,
        batch_capacity: usize,
        max_batches: Option<usize>,
        tasks: usize,
        parallel_depth: u32,
        field_separator: char,
        field_index: usize,
        header: bool,
        ignore_lines: Option<Regex>,
    ) -> Config {
        Config {
            algorithm,
            batch_capacity,
            max_batches,
            tasks,
            parallel_depth,
            field_separator,
            field_index,
            header,
            ignore_lines,
        }
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub(crate) fn batch_capacity(&self) -> usize {
        self.batch_capacity
    }

    pub(crate) fn max_batches(&self) -> Option<usize> {
        self.max_batches
    }

    pub(crate) fn tasks(&self) -> usize {
        self.tasks
    }

    pub(crate) fn parallel_depth(&self) -> u32 {
        self.parallel_depth
    }

    pub(crate) fn field_separator(&self) -> char {
        self.field_separator
    }

    pub(crate) fn field_index(&self) -> usize {
        self.field_index
    }

    pub(crate) fn header(&self) -> bool {
        self.header
    }

    pub(crate) fn ignore_lines(&self) -> &Option<Regex> {
        &self.ignore_lines
    }
}
