//! Rule-List-B: an ordered list of partial-tree rules.
//!
//! Order is significant; several rules overlap. Anything the list does not
//! cover is flagged.

use super::RuleList;

pub static RULE_LIST_B: RuleList = rule_list! {
    "rule-list-b":
    [DebugSize > 0, ResourceSize > 545, IatRva <= 94208, NumberOfSections <= 5, ExportSize > 0, NumberOfSections > 3] => clean,
    [DebugSize <= 0, ImageVersion <= 4900, ExportSize <= 71, ImageVersion <= 520, VirtualSize2 > 130, IatRva <= 24576] => dirty,
    [DebugSize <= 0, ImageVersion <= 4900, ExportSize <= 211, ResourceSize <= 32272, NumberOfSections <= 10, VirtualSize2 <= 5, ImageVersion <= 3420] => dirty,
    [DebugSize > 0, ResourceSize > 598, VirtualSize2 <= 105028, VirtualSize2 > 1, ImageVersion > 5000] => clean,
    [IatRva <= 0, ImageVersion > 4180, ResourceSize > 2484] => clean,
    [DebugSize <= 0, NumberOfSections <= 1, ResourceSize > 501] => clean,
    [DebugSize <= 0, ExportSize <= 211, NumberOfSections > 2, ImageVersion > 1000, ResourceSize <= 12996] => dirty,
    [DebugSize <= 0, ExportSize <= 211, NumberOfSections > 2, ResourceSize > 0, VirtualSize2 > 1016] => dirty,
    [NumberOfSections > 8, VirtualSize2 <= 2221] => dirty,
    [ResourceSize <= 736, NumberOfSections <= 3] => dirty,
    [NumberOfSections <= 3, IatRva > 4156] => clean,
    [ImageVersion <= 6000, ResourceSize <= 523, IatRva > 0, ExportSize <= 95] => dirty,
    [ExportSize <= 256176, DebugSize > 0, ImageVersion <= 5450, IatRva > 1664, ResourceSize <= 2040, DebugSize <= 41] => clean,
    [ExportSize <= 256176, ImageVersion > 5450] => clean,
    [ExportSize > 256176] => dirty,
    [ImageVersion > 0, ResourceSize > 298216, IatRva <= 2048] => dirty,
    [ImageVersion > 0, ExportSize > 74, DebugSize > 0] => clean,
    [ImageVersion > 0, VirtualSize2 > 4185, ResourceSize <= 215376, IatRva <= 2048, NumberOfSections <= 5] => clean,
    [ImageVersion > 1010, DebugSize <= 56, VirtualSize2 <= 215376] => clean,
    [ExportSize > 258, NumberOfSections > 3, DebugSize > 0] => clean,
    [ExportSize > 262, ImageVersion > 0, NumberOfSections > 7] => clean,
    [DebugSize > 41, NumberOfSections <= 4] => clean,
    [ExportSize <= 262, NumberOfSections > 3, VirtualSize2 <= 37] => dirty,
    [VirtualSize2 > 40, ExportSize <= 262, DebugSize <= 0, ImageVersion <= 353, ExportSize <= 142] => dirty,
    [VirtualSize2 > 72384, VirtualSize2 <= 263848] => dirty,
    [IatRva > 106496, IatRva <= 937984, DebugSize > 0, ResourceSize > 4358] => clean,
    [VirtualSize2 <= 64, IatRva <= 2048, DebugSize <= 0, ImageVersion <= 353, ExportSize <= 0, VirtualSize2 <= 4, NumberOfSections <= 2] => clean,
    [DebugSize <= 0, NumberOfSections <= 4, IatRva > 45548] => dirty,
    [DebugSize > 0, DebugSize <= 56, IatRva <= 94208, ResourceSize <= 4096] => dirty,
    [DebugSize <= 0, IatRva <= 98304, NumberOfSections > 6, ResourceSize <= 864, ExportSize > 74, ImageVersion > 353, ExportSize <= 279] => clean,
    [DebugSize <= 0, IatRva <= 98304, NumberOfSections <= 2, ResourceSize <= 1264128] => dirty,
    [VirtualSize2 <= 64, IatRva <= 2048, DebugSize > 0] => clean,
    [ExportSize <= 276, NumberOfSections > 5, ResourceSize <= 1076] => clean,
    [DebugSize > 0, IatRva <= 94208, ExportSize <= 82, DebugSize <= 56, NumberOfSections > 2, ImageVersion <= 2340, ResourceSize <= 118280, VirtualSize2 > 5340] => clean,
    [DebugSize > 0, ImageVersion <= 2340, DebugSize <= 56, NumberOfSections > 3, VirtualSize2 > 360, NumberOfSections <= 5] => dirty,
    [IatRva > 37380, ImageVersion <= 0, NumberOfSections <= 5, VirtualSize2 > 15864] => clean,
    [DebugSize <= 0, VirtualSize2 <= 80, IatRva <= 4096, ExportSize <= 0, VirtualSize2 > 4, VirtualSize2 <= 21] => clean,
    [DebugSize <= 0] => dirty,
    [ExportSize <= 82, DebugSize <= 56, NumberOfSections <= 5, NumberOfSections > 2, IatRva <= 6144, ImageVersion > 2340] => clean,
    [ImageVersion > 2340] => dirty,
    [ResourceSize > 5528] => clean,
    _ => dirty,
};
