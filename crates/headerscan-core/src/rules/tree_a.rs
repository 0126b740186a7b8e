//! Tree-A: a pruned binary decision tree over the seven header features.
//!
//! Splits at the root on whether the binary carries a debug directory.

use super::DecisionTree;

pub static TREE_A: DecisionTree = DecisionTree {
    name: "tree-a",
    root: tree! {
        if DebugSize <= 0 {
            if ExportSize <= 211 {
                if ImageVersion <= 520 {
                    if VirtualSize2 <= 130 {
                        if VirtualSize2 <= 5 {
                            if ResourceSize <= 37520 {
                                dirty
                            } else {
                                if NumberOfSections <= 2 {
                                    if IatRva <= 2048 {
                                        clean
                                    } else {
                                        dirty
                                    }
                                } else {
                                    dirty
                                }
                            }
                        } else {
                            if VirtualSize2 <= 12 {
                                if NumberOfSections <= 3 {
                                    clean
                                } else {
                                    dirty
                                }
                            } else {
                                dirty
                            }
                        }
                    } else {
                        dirty
                    }
                } else {
                    if ResourceSize <= 0 {
                        if ImageVersion <= 1000 {
                            if NumberOfSections <= 4 {
                                dirty
                            } else {
                                if ExportSize <= 74 {
                                    if VirtualSize2 <= 1556 {
                                        dirty
                                    } else {
                                        clean
                                    }
                                } else {
                                    clean
                                }
                            }
                        } else {
                            dirty
                        }
                    } else {
                        if NumberOfSections <= 2 {
                            if ImageVersion <= 3420 {
                                dirty
                            } else {
                                clean
                            }
                        } else {
                            dirty
                        }
                    }
                }
            } else {
                if ImageVersion <= 0 {
                    if ExportSize <= 23330 {
                        if IatRva <= 98304 {
                            if NumberOfSections <= 3 {
                                dirty
                            } else {
                                if IatRva <= 53872 {
                                    clean
                                } else {
                                    if ExportSize <= 273 {
                                        dirty
                                    } else {
                                        if ResourceSize <= 1016 {
                                            dirty
                                        } else {
                                            clean
                                        }
                                    }
                                }
                            }
                        } else {
                            clean
                        }
                    } else {
                        dirty
                    }
                } else {
                    clean
                }
            }
        } else {
            if ResourceSize <= 545 {
                if ExportSize <= 92 {
                    if NumberOfSections <= 4 {
                        clean
                    } else {
                        dirty
                    }
                } else {
                    clean
                }
            } else {
                if IatRva <= 94208 {
                    if NumberOfSections <= 5 {
                        if ExportSize <= 0 {
                            if NumberOfSections <= 4 {
                                if IatRva <= 13504 {
                                    if ImageVersion <= 353 {
                                        if NumberOfSections <= 3 {
                                            if IatRva <= 6144 {
                                                if IatRva <= 2048 {
                                                    clean
                                                } else {
                                                    if VirtualSize2 <= 496 {
                                                        dirty
                                                    } else {
                                                        clean
                                                    }
                                                }
                                            } else {
                                                clean
                                            }
                                        } else {
                                            if DebugSize <= 41 {
                                                if ResourceSize <= 22720 {
                                                    dirty
                                                } else {
                                                    clean
                                                }
                                            } else {
                                                clean
                                            }
                                        }
                                    } else {
                                        clean
                                    }
                                } else {
                                    if ResourceSize <= 35328 {
                                        clean
                                    } else {
                                        dirty
                                    }
                                }
                            } else {
                                if IatRva <= 2048 {
                                    dirty
                                } else {
                                    clean
                                }
                            }
                        } else {
                            clean
                        }
                    } else {
                        if IatRva <= 1054 {
                            if ExportSize <= 218 {
                                if IatRva <= 704 {
                                    dirty
                                } else {
                                    if NumberOfSections <= 6 {
                                        dirty
                                    } else {
                                        clean
                                    }
                                }
                            } else {
                                clean
                            }
                        } else {
                            clean
                        }
                    }
                } else {
                    if ExportSize <= 0 {
                        if VirtualSize2 <= 78800 {
                            if NumberOfSections <= 4 {
                                clean
                            } else {
                                if ImageVersion <= 2340 {
                                    if ResourceSize <= 7328 {
                                        dirty
                                    } else {
                                        clean
                                    }
                                } else {
                                    clean
                                }
                            }
                        } else {
                            dirty
                        }
                    } else {
                        if IatRva <= 106496 {
                            if ResourceSize <= 2800 {
                                clean
                            } else {
                                dirty
                            }
                        } else {
                            clean
                        }
                    }
                }
            }
        }
    },
};
