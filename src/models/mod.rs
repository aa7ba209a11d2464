pub mod gene_tree;

pub use gene_tree::{
    MatchedRecord, ALIGNMENT_FIELD, CLUSTER_ID_FIELD, GENE_ID_FIELD, GENE_SEQUENCE_FIELD,
    GENE_TREE_FIELD,
};
