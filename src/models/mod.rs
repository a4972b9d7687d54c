//! Response models
//!
//! Serde mirrors of the JSON the Sourcify server returns. Field names follow
//! the wire format (camelCase). Most structs default missing fields, since
//! the server omits whatever a given contract does not have.

mod chain;
mod contract;
mod files;
mod metadata;

pub use chain::{
    Chain, ChainBridge, ChainEns, ChainExplorer, ChainFeature, ChainNativeCurrency, ChainParent,
};
pub use contract::{
    Bytecode, CborAuxData, Compilation, CompilerSettings, ContractBaseResponse, ContractOutput,
    ContractResponse, ContractsResponse, Deployment, EvmBytecode, EvmDeployedBytecode, EvmOutput,
    ProxyResolution, SourceContent, SourceIdReference, StdJsonInput, StdJsonOutput, StorageEntry,
    StorageLayout, StorageType, Transformation, TransformationValues,
};
pub use files::{
    CheckContractAddress, FileTree, SourceCode, SourceCodes, VerifiedContractAddresses,
};
pub use metadata::{
    AbiEntry, AbiParameter, BytecodeHash, Compiler, DevDoc, Metadata, MetadataSource, Optimizer,
    Output, Settings, UserDoc,
};

#[cfg(test)]
mod tests;
